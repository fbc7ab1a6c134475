//! Social Media scorer.

use crate::composite::clamp_score;
use crate::scope::scope_score;
use crate::submission::{Client, Employee};
use crate::types::Department;

use super::{average, ratio_score, KpiScorer};

/// Social Media. Designers are scored on creative output and quality;
/// everyone else on audience growth, reach, engagement and campaigns.
pub struct SocialMediaScorer;

impl SocialMediaScorer {
    fn designer_score(clients: &[Client]) -> f64 {
        let volume = ratio_score(average(clients, |c| c.social.graphics()), 10.0);
        let quality = clamp_score(average(clients, |c| c.social.quality_score));

        0.4 * volume + 0.4 * quality + 0.2 * scope_score(clients)
    }

    fn growth_score(clients: &[Client]) -> f64 {
        let growth = ratio_score(
            average(clients, |c| c.social.followers_this - c.social.followers_prev),
            200.0,
        );
        let reach = ratio_score(average(clients, |c| c.social.reach_this), 50_000.0);
        let engagement = ratio_score(average(clients, |c| c.social.er_this), 5.0);
        let campaigns = ratio_score(average(clients, |c| c.social.campaigns_this), 4.0);

        0.3 * growth + 0.2 * reach + 0.2 * engagement + 0.1 * campaigns + 0.2 * scope_score(clients)
    }
}

impl KpiScorer for SocialMediaScorer {
    fn department(&self) -> Department {
        Department::SocialMedia
    }

    fn score(&self, employee: &Employee, clients: &[Client]) -> f64 {
        if employee.is_designer() {
            Self::designer_score(clients)
        } else {
            Self::growth_score(clients)
        }
    }
}
