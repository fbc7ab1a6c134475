//! Learning hours scorer.

use crate::composite::{clamp_score, round1};
use crate::submission::LearningEntry;

/// Minutes of learning that earn a full score (six hours).
pub const DEFAULT_LEARNING_TARGET_MINUTES: f64 = 360.0;

/// Total learning minutes; negative durations count as zero.
pub fn total_minutes(entries: &[LearningEntry]) -> f64 {
    entries.iter().map(|e| e.duration_mins.max(0.0)).sum()
}

/// Learning score against the default six-hour target.
pub fn score_learning(entries: &[LearningEntry]) -> f64 {
    score_learning_with_target(entries, DEFAULT_LEARNING_TARGET_MINUTES)
}

/// Learning score in `[0, 10]`, proportional to minutes up to the target.
pub fn score_learning_with_target(entries: &[LearningEntry], target_minutes: f64) -> f64 {
    if target_minutes <= 0.0 {
        return 0.0;
    }
    round1(clamp_score(total_minutes(entries) / target_minutes * 10.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(minutes: &[f64]) -> Vec<LearningEntry> {
        minutes
            .iter()
            .map(|&duration_mins| LearningEntry {
                title: "course".to_string(),
                duration_mins,
            })
            .collect()
    }

    #[test]
    fn test_half_the_target_scores_five() {
        assert_eq!(score_learning(&entries(&[90.0, 90.0])), 5.0);
    }

    #[test]
    fn test_score_caps_at_ten() {
        assert_eq!(score_learning(&entries(&[600.0])), 10.0);
    }

    #[test]
    fn test_no_entries_scores_zero() {
        assert_eq!(score_learning(&[]), 0.0);
    }

    #[test]
    fn test_negative_durations_are_ignored() {
        assert_eq!(total_minutes(&entries(&[120.0, -60.0])), 120.0);
        assert_eq!(score_learning(&entries(&[-500.0])), 0.0);
    }

    #[test]
    fn test_custom_target() {
        assert_eq!(score_learning_with_target(&entries(&[240.0]), 480.0), 5.0);
        assert_eq!(score_learning_with_target(&entries(&[240.0]), 0.0), 0.0);
    }
}
