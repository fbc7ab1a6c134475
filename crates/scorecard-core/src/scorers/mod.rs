//! Department KPI scorers.
//!
//! Each department has one [`KpiScorer`]. Scorers are stateless unit structs
//! resolved through [`scorer_for`], whose `match` over [`Department`] is
//! exhaustive, so adding a department without a scorer fails to compile.
//!
//! Every sub-metric is normalised to `[0, 10]` before weighting; the final
//! score is clamped to `[0, 10]` and rounded to one decimal by [`score_kpi`].

mod ads;
mod internal;
mod operations;
mod seo;
mod social;
mod web;

pub use ads::AdsScorer;
pub use internal::{AccountsScorer, BlendedScorer, HrScorer, SalesScorer};
pub use operations::OperationsHeadScorer;
pub use seo::SeoScorer;
pub use social::SocialMediaScorer;
pub use web::{WebHeadScorer, WebScorer};

use tracing::warn;

use crate::composite::{clamp_score, round1};
use crate::submission::{Client, Employee};
use crate::types::Department;

/// Trait for department KPI scorers.
pub trait KpiScorer: Send + Sync {
    /// The department this scorer handles.
    fn department(&self) -> Department;

    /// Raw weighted score for the month's clients, before clamping and
    /// rounding.
    fn score(&self, employee: &Employee, clients: &[Client]) -> f64;
}

/// Look up the scorer for a department. `None` only for unrecognised labels.
pub fn scorer_for(department: &Department) -> Option<&'static dyn KpiScorer> {
    match department {
        Department::Web => Some(&WebScorer),
        Department::SocialMedia => Some(&SocialMediaScorer),
        Department::Ads => Some(&AdsScorer),
        Department::Seo => Some(&SeoScorer),
        Department::Hr => Some(&HrScorer),
        Department::Accounts => Some(&AccountsScorer),
        Department::Sales => Some(&SalesScorer),
        Department::Blended => Some(&BlendedScorer),
        Department::OperationsHead => Some(&OperationsHeadScorer),
        Department::WebHead => Some(&WebHeadScorer),
        Department::Unrecognized(_) => None,
    }
}

/// KPI score for the employee's department.
///
/// # Arguments
///
/// * `employee` - Supplies the department and, for Social Media, the role
/// * `clients` - The month's client entries with `Prev` values filled in.
///   Internal departments read their record from the first slot.
///
/// # Returns
///
/// A score in `[0, 10]` with one decimal. Missing and unrecognised
/// departments score `0`; the validator reports them.
pub fn score_kpi(employee: &Employee, clients: &[Client]) -> f64 {
    let Some(department) = employee.department.as_ref() else {
        return 0.0;
    };

    match scorer_for(department) {
        Some(scorer) => round1(clamp_score(scorer.score(employee, clients))),
        None => {
            warn!(department = %department, "no KPI scorer for department, scoring 0");
            0.0
        }
    }
}

/// `value / threshold` on a 0-10 scale, clamped.
pub(crate) fn ratio_score(value: f64, threshold: f64) -> f64 {
    clamp_score(value / threshold * 10.0)
}

/// Client count used as the averaging divisor, never below 1.
pub(crate) fn divisor(clients: &[Client]) -> f64 {
    clients.len().max(1) as f64
}

/// Sum a per-client metric.
pub(crate) fn total(clients: &[Client], metric: impl Fn(&Client) -> f64) -> f64 {
    clients.iter().map(metric).sum()
}

/// Per-client average of a metric, over at least one client.
pub(crate) fn average(clients: &[Client], metric: impl Fn(&Client) -> f64) -> f64 {
    total(clients, metric) / divisor(clients)
}

/// Non-negative percentage change between two totals.
pub(crate) fn growth_pct(this: f64, prev: f64) -> f64 {
    ((this - prev) / prev.max(1.0) * 100.0).max(0.0)
}
