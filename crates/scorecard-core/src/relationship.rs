//! Client relationship scorer.

use crate::composite::{clamp_score, round1};
use crate::config::RelationshipWeights;
use crate::submission::Client;

/// Engagement counts gathered across every client.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelationshipTally {
    pub meetings: usize,

    /// From client relationship records
    pub appreciations: usize,
    pub escalations: usize,

    /// From Operations Head client records
    pub ops_appreciations: usize,
    pub ops_escalations: usize,

    /// Mean satisfaction over rated clients, `None` when nobody is rated
    pub satisfaction: Option<f64>,
}

impl RelationshipTally {
    pub fn from_clients(clients: &[Client]) -> Self {
        let mut tally = Self::default();
        let mut rated = 0usize;
        let mut satisfaction_sum = 0.0;

        for client in clients {
            let relationship = &client.relationship;
            tally.meetings += relationship.meetings.len();
            tally.appreciations += relationship.appreciations.len();
            tally.escalations += relationship.escalations.len();
            tally.ops_appreciations += client.operations.appreciations.len();
            tally.ops_escalations += client.operations.escalations.len();

            if relationship.client_satisfaction > 0.0 {
                satisfaction_sum += relationship.client_satisfaction;
                rated += 1;
            }
        }

        if rated > 0 {
            tally.satisfaction = Some(satisfaction_sum / rated as f64);
        }
        tally
    }

    pub fn total_appreciations(&self) -> usize {
        self.appreciations + self.ops_appreciations
    }

    pub fn total_escalations(&self) -> usize {
        self.escalations + self.ops_escalations
    }
}

/// Relationship score with the default weights.
pub fn score_relationship(clients: &[Client]) -> f64 {
    score_relationship_with(clients, &RelationshipWeights::default())
}

/// Relationship score in `[0, 10]`: capped credit for meetings,
/// appreciations and satisfaction, minus a capped escalation penalty.
pub fn score_relationship_with(clients: &[Client], weights: &RelationshipWeights) -> f64 {
    let tally = RelationshipTally::from_clients(clients);

    let meetings = (tally.meetings as f64 * weights.meeting_weight).min(weights.meeting_cap);
    let appreciations = (tally.total_appreciations() as f64 * weights.appreciation_weight)
        .min(weights.appreciation_cap);
    let satisfaction =
        (tally.satisfaction.unwrap_or(0.0) * weights.satisfaction_weight).min(weights.satisfaction_cap);
    let escalations =
        (tally.total_escalations() as f64 * weights.escalation_weight).min(weights.escalation_cap);

    round1(clamp_score(meetings + appreciations + satisfaction - escalations))
}
