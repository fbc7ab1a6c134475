//! SEO scorer.

use crate::scope::scope_score;
use crate::submission::{Client, Employee};
use crate::types::Department;

use super::{average, growth_pct, ratio_score, total, KpiScorer};

/// SEO: month-over-month growth of organic traffic, LLM referrals and leads
/// (over client totals), keyword work, AI overview presence, search volume,
/// top-three rankings and scope.
pub struct SeoScorer;

impl SeoScorer {
    /// Mean search volume over every keyword worked, across all clients.
    fn average_search_volume(clients: &[Client]) -> f64 {
        let volumes: Vec<f64> = clients
            .iter()
            .flat_map(|c| c.seo.keywords_worked.iter())
            .map(|k| k.search_volume.unwrap_or(0.0))
            .collect();
        volumes.iter().sum::<f64>() / volumes.len().max(1) as f64
    }
}

impl KpiScorer for SeoScorer {
    fn department(&self) -> Department {
        Department::Seo
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        let traffic = ratio_score(
            growth_pct(
                total(clients, |c| c.seo.traffic_this.unwrap_or(0.0)),
                total(clients, |c| c.seo.traffic_prev),
            ),
            20.0,
        );
        let llm = ratio_score(
            growth_pct(
                total(clients, |c| c.seo.llm_traffic_this),
                total(clients, |c| c.seo.llm_traffic_prev),
            ),
            20.0,
        );
        let leads = ratio_score(
            growth_pct(
                total(clients, |c| c.seo.leads_this),
                total(clients, |c| c.seo.leads_prev),
            ),
            20.0,
        );
        let keywords = ratio_score(average(clients, |c| c.seo.keywords_improved_this), 10.0);
        let ai_overview = ratio_score(
            average(clients, |c| c.seo.ai_overview_this.unwrap_or(0.0)),
            5.0,
        );
        let volume = ratio_score(Self::average_search_volume(clients), 500.0);
        let top3 = ratio_score(average(clients, |c| c.seo.top3.len() as f64), 10.0);

        0.2 * traffic
            + 0.15 * keywords
            + 0.08 * ai_overview
            + 0.08 * volume
            + 0.12 * llm
            + 0.12 * leads
            + 0.05 * top3
            + 0.2 * scope_score(clients)
    }
}
