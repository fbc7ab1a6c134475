//! Operations Head scorer.

use crate::composite::clamp_score;
use crate::submission::{Client, Employee};
use crate::types::{ClientStatus, Department};

use super::{divisor, KpiScorer};

/// Operations Head: an additive per-client account health score, averaged
/// over clients.
pub struct OperationsHeadScorer;

impl OperationsHeadScorer {
    /// Account health for one client, clamped to `[0, 10]`.
    pub fn client_score(client: &Client) -> f64 {
        let ops = &client.operations;
        let mut score = 0.0;

        if !ops.payment_date.trim().is_empty() {
            score += 2.0;
        }
        if ops.team_finished_scope {
            score += 3.0;
        }
        score += 0.5 * ops.satisfaction_score;

        match ops.client_status {
            Some(ClientStatus::Upgraded) => score += 2.0,
            Some(ClientStatus::Left) | Some(ClientStatus::Reduced) => score -= 2.0,
            _ => {}
        }

        score += 0.5 * ops.appreciations.len() as f64;
        score -= 0.5 * ops.escalations.len() as f64;

        clamp_score(score)
    }
}

impl KpiScorer for OperationsHeadScorer {
    fn department(&self) -> Department {
        Department::OperationsHead
    }

    fn score(&self, _employee: &Employee, clients: &[Client]) -> f64 {
        clients.iter().map(Self::client_score).sum::<f64>() / divisor(clients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorers::score_kpi;
    use crate::submission::ProofEntry;

    fn employee() -> Employee {
        Employee {
            department: Some(Department::OperationsHead),
            ..Employee::default()
        }
    }

    fn healthy() -> Client {
        let mut client = Client::default();
        client.operations.payment_date = "2024-03-05".into();
        client.operations.team_finished_scope = true;
        client.operations.satisfaction_score = 8.0;
        client
    }

    #[test]
    fn test_additive_client_score() {
        // 2 + 3 + 4
        assert_eq!(OperationsHeadScorer::client_score(&healthy()), 9.0);
    }

    #[test]
    fn test_upgrade_is_capped_at_ten() {
        let mut client = healthy();
        client.operations.client_status = Some(ClientStatus::from("upgraded"));
        client.operations.appreciations = vec![ProofEntry::default(); 2];
        assert_eq!(OperationsHeadScorer::client_score(&client), 10.0);
    }

    #[test]
    fn test_lost_client_never_negative() {
        let mut client = Client::default();
        client.operations.client_status = Some(ClientStatus::Left);
        client.operations.escalations = vec![ProofEntry::default(); 3];
        assert_eq!(OperationsHeadScorer::client_score(&client), 0.0);
    }

    #[test]
    fn test_status_is_case_insensitive() {
        let mut client = healthy();
        client.operations.client_status = Some(ClientStatus::from("REDUCED"));
        assert_eq!(OperationsHeadScorer::client_score(&client), 7.0);
    }

    #[test]
    fn test_kpi_is_mean_over_clients() {
        let mut escalated = Client::default();
        escalated.operations.team_finished_scope = true;
        escalated.operations.escalations = vec![ProofEntry::default(); 2];
        // (9 + 2) / 2
        assert_eq!(score_kpi(&employee(), &[healthy(), escalated]), 5.5);
        assert_eq!(score_kpi(&employee(), &[]), 0.0);
    }
}
