//! Web and Web Head scorers.

use crate::composite::clamp_score;
use crate::scope::scope_score;
use crate::submission::{Client, Employee};
use crate::types::Department;

use super::{average, divisor, ratio_score, total, KpiScorer};

/// Average on-time percentage on a 0-10 scale.
fn on_time_score(clients: &[Client]) -> f64 {
    clamp_score(average(clients, |c| c.web.on_time_this) / 10.0)
}

/// Web developers: pages shipped, on-time delivery, bugs fixed and scope.
pub struct WebScorer;

impl KpiScorer for WebScorer {
    fn department(&self) -> Department {
        Department::Web
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        let pages = ratio_score(total(clients, |c| c.web.pages_this), 10.0);
        let bugs = ratio_score(total(clients, |c| c.web.bugs_this), 20.0);

        0.4 * pages + 0.25 * on_time_score(clients) + 0.15 * bugs + 0.2 * scope_score(clients)
    }
}

/// Web Head: SaaS upsells and pages against per-client targets, plus
/// on-time delivery.
pub struct WebHeadScorer;

impl KpiScorer for WebHeadScorer {
    fn department(&self) -> Department {
        Department::WebHead
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        let n = divisor(clients);
        let upsells = ratio_score(total(clients, |c| c.web.saas_upsells), 2.0 * n);
        let pages = ratio_score(total(clients, |c| c.web.pages_this), 5.0 * n);

        0.4 * upsells + 0.4 * pages + 0.2 * on_time_score(clients)
    }
}
