//! Calendar helpers for report months.
//!
//! Month keys are `YYYY-MM` strings. Every helper degrades to a conservative
//! default for unusable keys instead of failing.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::patterns::{DATE_PATTERN, MONTH_KEY_PATTERN};

/// Days assumed when the month key cannot be read.
pub const FALLBACK_DAYS_IN_MONTH: u32 = 31;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Split a `YYYY-MM` key into year and month (1-12).
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let caps = MONTH_KEY_PATTERN.captures(key.trim())?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Number of calendar days in the month, 31 for an unusable key.
pub fn days_in_month(key: &str) -> u32 {
    parse_month_key(key)
        .and_then(|(year, month)| last_day_of_month(year, month))
        .map(|date| date.day())
        .unwrap_or(FALLBACK_DAYS_IN_MONTH)
}

/// Short label such as `Feb 2024`; empty for an unusable key.
pub fn month_label(key: &str) -> String {
    parse_month_key(key)
        .and_then(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// The month key immediately before `key`.
pub fn previous_month_key(key: &str) -> Option<String> {
    let (year, month) = parse_month_key(key)?;
    let (year, month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    Some(format!("{year:04}-{month:02}"))
}

/// `YYYY-MM-DD` that is also a real calendar date.
pub fn is_valid_date(value: &str) -> bool {
    DATE_PATTERN.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Late-submission penalty for one report month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisciplinePenalty {
    /// Last day a submission is on time.
    pub due_date: NaiveDate,

    pub submitted_at: DateTime<Utc>,

    /// Whole days past the due date, rounded up.
    pub late_days: u32,

    /// 0.5 per started week late, capped at 2.0.
    pub penalty: f64,
}

/// Compute the late-submission penalty for `month_key`.
///
/// The due date is the last day of the month plus `grace_days`, at midnight
/// UTC. Returns `None` when the month key cannot be read.
pub fn discipline_penalty(
    month_key: &str,
    submitted_at: DateTime<Utc>,
    grace_days: u32,
) -> Option<DisciplinePenalty> {
    let (year, month) = parse_month_key(month_key)?;
    let due_date = last_day_of_month(year, month)?.checked_add_days(Days::new(u64::from(grace_days)))?;
    let due_at = due_date.and_hms_opt(0, 0, 0)?.and_utc();

    let late_ms = submitted_at.signed_duration_since(due_at).num_milliseconds();
    let late_days = if late_ms > 0 {
        ((late_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY) as u32
    } else {
        0
    };

    let penalty = if late_days > 0 {
        (f64::from(late_days.div_ceil(7)) * 0.5).min(2.0)
    } else {
        0.0
    };

    Some(DisciplinePenalty {
        due_date,
        submitted_at,
        late_days,
        penalty,
    })
}
