//! Composite score aggregation and the shared rounding convention.

use crate::config::CompositeWeights;
use crate::types::Scores;

/// Round to one decimal place, halves away from zero (`3.25` -> `3.3`).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp into `[0, 10]`; NaN and infinities become 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 10.0)
    } else {
        0.0
    }
}

/// Combines the three computed sub-scores with the manager's score.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    weights: CompositeWeights,
}

impl Aggregator {
    pub fn new(weights: CompositeWeights) -> Self {
        Self { weights }
    }

    /// Weighted overall score. Inputs are clamped to `[0, 10]` first.
    pub fn overall(&self, kpi: f64, learning: f64, relationship: f64, manager: f64) -> f64 {
        let w = &self.weights;
        round1(
            clamp_score(kpi) * w.kpi
                + clamp_score(learning) * w.learning
                + clamp_score(relationship) * w.relationship
                + clamp_score(manager) * w.manager,
        )
    }

    /// Assemble the `scores` block for a submission.
    pub fn scores(&self, kpi: f64, learning: f64, relationship: f64, manager: f64) -> Scores {
        Scores {
            kpi_score: kpi,
            learning_score: learning,
            relationship_score: relationship,
            overall: self.overall(kpi, learning, relationship, manager),
        }
    }
}

/// Overall score with the default 40/30/20/10 weights.
pub fn overall(kpi: f64, learning: f64, relationship: f64, manager: f64) -> f64 {
    Aggregator::default().overall(kpi, learning, relationship, manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_halves_away_from_zero() {
        assert_eq!(round1(3.25), 3.3);
        assert_eq!(round1(3.24), 3.2);
        assert_eq!(round1(0.05), 0.1);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(10.0), 10.0);
    }

    #[test]
    fn test_default_weights() {
        assert_eq!(overall(8.0, 5.0, 3.3, 0.0), 5.4);
        assert_eq!(overall(10.0, 10.0, 10.0, 10.0), 10.0);
        assert_eq!(overall(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_inputs_are_clamped() {
        assert_eq!(overall(15.0, 10.0, 10.0, 42.0), 10.0);
        assert_eq!(overall(-3.0, 0.0, 0.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_custom_weights() {
        let aggregator = Aggregator::new(CompositeWeights {
            kpi: 0.5,
            learning: 0.5,
            relationship: 0.0,
            manager: 0.0,
        });
        assert_eq!(aggregator.overall(8.0, 4.0, 10.0, 10.0), 6.0);
    }

    #[test]
    fn test_scores_block() {
        let scores = Aggregator::default().scores(8.0, 5.0, 3.3, 7.0);
        assert_eq!(scores.kpi_score, 8.0);
        assert_eq!(scores.overall, 6.1);
    }
}
