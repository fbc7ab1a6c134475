//! Internal departments: HR, Accounts, Sales and Blended.
//!
//! These departments have no real clients. The first one or two client
//! entries serve as department records holding the month's figures.

use crate::composite::clamp_score;
use crate::submission::{AccountsMetrics, Client, Employee, HrMetrics, SalesMetrics};
use crate::types::Department;

use super::{ratio_score, KpiScorer};

fn hr_record(clients: &[Client], slot: usize) -> HrMetrics {
    clients.get(slot).map(|c| c.hr.clone()).unwrap_or_default()
}

fn sales_record(clients: &[Client], slot: usize) -> SalesMetrics {
    clients.get(slot).map(|c| c.sales.clone()).unwrap_or_default()
}

fn accounts_record(clients: &[Client], slot: usize) -> AccountsMetrics {
    clients.get(slot).map(|c| c.accounts.clone()).unwrap_or_default()
}

/// HR: hires, candidates screened and engagement activities.
pub struct HrScorer;

impl KpiScorer for HrScorer {
    fn department(&self) -> Department {
        Department::Hr
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        let hr = hr_record(clients, 0);
        let hires = clamp_score(hr.hires_this * 3.0);
        let screened = ratio_score(hr.screened, 50.0);
        let engagement = clamp_score(hr.engagements * 2.5);

        0.4 * hires + 0.4 * screened + 0.2 * engagement
    }
}

/// Accounts: collection improvement and statutory filings.
pub struct AccountsScorer;

impl KpiScorer for AccountsScorer {
    fn department(&self) -> Department {
        Department::Accounts
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        let accounts = accounts_record(clients, 0);
        let improvement = (accounts.collections_pct_this - accounts.collections_pct_prev).max(0.0);
        let collections = clamp_score(improvement / 20.0 * 5.0);

        let mut compliance = 0.0;
        if accounts.gst_done {
            compliance += 2.5;
        }
        if accounts.tds_done {
            compliance += 2.5;
        }

        0.5 * collections + 0.5 * compliance
    }
}

/// Sales: month-over-month revenue, conversion, pipeline and AI upsell gains.
pub struct SalesScorer;

impl KpiScorer for SalesScorer {
    fn department(&self) -> Department {
        Department::Sales
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        let sales = sales_record(clients, 0);
        let revenue = ratio_score(sales.revenue_this - sales.revenue_prev, 500_000.0);
        let conversion = ratio_score(sales.conversion_rate_this - sales.conversion_rate_prev, 5.0);
        let pipeline = ratio_score(sales.pipeline_this - sales.pipeline_prev, 25.0);
        let upsell = ratio_score(sales.ai_upsell_value_this - sales.ai_upsell_value_prev, 100_000.0);

        0.45 * revenue + 0.2 * conversion + 0.2 * pipeline + 0.15 * upsell
    }
}

/// Blended HR + Sales: HR record in the first slot, sales record in the
/// second, weighted 80/20.
pub struct BlendedScorer;

impl KpiScorer for BlendedScorer {
    fn department(&self) -> Department {
        Department::Blended
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        let hr = hr_record(clients, 0);
        let sales = sales_record(clients, 1);

        let hr_score = 0.6 * ratio_score(hr.hires_this - hr.hires_prev, 3.0)
            + 0.4 * ratio_score(hr.process_done_pct_this - hr.process_done_pct_prev, 10.0);
        let sales_score = 0.7 * ratio_score(sales.revenue_this - sales.revenue_prev, 300_000.0)
            + 0.3 * ratio_score(sales.conversion_rate_this - sales.conversion_rate_prev, 5.0);

        0.8 * hr_score + 0.2 * sales_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorers::score_kpi;

    fn employee(department: Department) -> Employee {
        Employee {
            department: Some(department),
            ..Employee::default()
        }
    }

    #[test]
    fn test_hr_uses_first_slot_only() {
        let mut record = Client::default();
        record.hr.hires_this = 2.0;
        record.hr.screened = 25.0;
        record.hr.engagements = 4.0;
        let mut ignored = Client::default();
        ignored.hr.hires_this = 50.0;

        // 0.4*6 + 0.4*5 + 0.2*10
        assert_eq!(score_kpi(&employee(Department::Hr), &[record, ignored]), 6.4);
    }

    #[test]
    fn test_hr_without_record_is_zero() {
        assert_eq!(score_kpi(&employee(Department::Hr), &[]), 0.0);
    }

    #[test]
    fn test_accounts_collections_and_compliance() {
        let mut record = Client::default();
        record.accounts.collections_pct_prev = 60.0;
        record.accounts.collections_pct_this = 80.0;
        record.accounts.gst_done = true;

        // collections 20pt -> 5, compliance 2.5
        assert_eq!(score_kpi(&employee(Department::Accounts), &[record]), 3.8);
    }

    #[test]
    fn test_sales_negative_deltas_score_zero() {
        let mut record = Client::default();
        record.sales.revenue_prev = 900_000.0;
        record.sales.revenue_this = 100_000.0;
        record.sales.pipeline_prev = 10.0;
        record.sales.pipeline_this = 35.0;

        // only pipeline: 0.2 * 10
        assert_eq!(score_kpi(&employee(Department::Sales), &[record]), 2.0);
    }

    #[test]
    fn test_blended_reads_hr_then_sales_slots() {
        let mut hr = Client::default();
        hr.hr.hires_prev = 1.0;
        hr.hr.hires_this = 4.0;
        let mut sales = Client::default();
        sales.sales.revenue_this = 300_000.0;

        // 0.8 * (0.6*10) + 0.2 * (0.7*10)
        assert_eq!(score_kpi(&employee(Department::Blended), &[hr, sales]), 6.2);
    }
}
