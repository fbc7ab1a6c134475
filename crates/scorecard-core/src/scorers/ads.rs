//! Ads scorer.

use crate::composite::clamp_score;
use crate::scope::scope_score;
use crate::submission::{Client, Employee};
use crate::types::Department;

use super::{average, ratio_score, KpiScorer};

/// Cost per lead at which the CPL term reaches full marks.
const TARGET_CPL: f64 = 3.0;

/// Floor under the average CPL so a zero cost cannot divide by zero.
const MIN_CPL: f64 = 0.1;

/// Paid ads: click-through rate, cost per lead (lower is better), leads,
/// new ads built and scope.
pub struct AdsScorer;

impl KpiScorer for AdsScorer {
    fn department(&self) -> Department {
        Department::Ads
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        let ctr = ratio_score(average(clients, |c| c.ads.ctr_this), 3.0);
        let cpl = clamp_score(TARGET_CPL / average(clients, |c| c.ads.cpl_this).max(MIN_CPL) * 10.0);
        let leads = ratio_score(average(clients, |c| c.ads.leads_this), 150.0);
        let new_ads = ratio_score(average(clients, |c| c.ads.new_ads), 15.0);

        0.25 * ctr + 0.25 * cpl + 0.25 * leads + 0.05 * new_ads + 0.2 * scope_score(clients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorers::score_kpi;

    fn employee() -> Employee {
        Employee {
            department: Some(Department::Ads),
            ..Employee::default()
        }
    }

    fn client(ctr: f64, cpl: f64, leads: f64, new_ads: f64) -> Client {
        let mut client = Client::default();
        client.ads.ctr_this = ctr;
        client.ads.cpl_this = cpl;
        client.ads.leads_this = leads;
        client.ads.new_ads = new_ads;
        client
    }

    #[test]
    fn test_cheaper_leads_score_higher() {
        let cheap = score_kpi(&employee(), &[client(3.0, 3.0, 150.0, 15.0)]);
        let pricey = score_kpi(&employee(), &[client(3.0, 30.0, 150.0, 15.0)]);
        assert_eq!(cheap, 8.0);
        assert_eq!(pricey, 5.8);
    }

    #[test]
    fn test_zero_cpl_gets_full_cpl_marks() {
        assert_eq!(score_kpi(&employee(), &[client(0.0, 0.0, 0.0, 0.0)]), 2.5);
    }

    #[test]
    fn test_metrics_are_averaged_per_client() {
        let clients = vec![client(3.0, 3.0, 150.0, 0.0), client(0.0, 3.0, 0.0, 0.0)];
        // ctr 1.5 -> 5, cpl 3 -> 10, leads 75 -> 5
        assert_eq!(score_kpi(&employee(), &clients), 5.0);
    }
}
