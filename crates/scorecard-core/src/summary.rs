//! Warning flags and the plain-text monthly synopsis.

use crate::learning::total_minutes;
use crate::relationship::RelationshipTally;
use crate::submission::Submission;
use crate::types::{Flags, Scores};

/// Derive the warning flags for a submission.
pub fn compute_flags(submission: &Submission, learning_target_minutes: f64) -> Flags {
    Flags {
        missing_learning_hours: total_minutes(&submission.learning) < learning_target_minutes,
        has_escalations: submission
            .clients
            .iter()
            .any(|c| !c.relationship.escalations.is_empty()),
        missing_reports: submission.clients.iter().any(|c| c.reports.is_empty()),
    }
}

/// `6h`, `7.5h`: hours without a trailing `.0`.
fn hours_label(minutes: f64) -> String {
    let hours = minutes / 60.0;
    if hours.fract() == 0.0 {
        format!("{hours:.0}h")
    } else {
        format!("{hours:.1}h")
    }
}

/// Short synopsis of the month: clients, engagement, learning, warnings and
/// the final scores.
pub fn generate_summary(
    submission: &Submission,
    scores: &Scores,
    flags: &Flags,
    learning_target_minutes: f64,
) -> String {
    let names: Vec<&str> = submission
        .clients
        .iter()
        .map(|c| c.name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    let tally = RelationshipTally::from_clients(&submission.clients);
    let learning = total_minutes(&submission.learning);
    let target = hours_label(learning_target_minutes);

    let mut parts = Vec::new();
    parts.push(format!(
        "Handled {} client(s): {}.",
        names.len(),
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    ));
    parts.push(format!(
        "Meetings {}, Appreciations {}, Escalations {}.",
        tally.meetings, tally.appreciations, tally.escalations
    ));
    parts.push(format!(
        "Learning: {:.1}h ({}).",
        learning / 60.0,
        if learning >= learning_target_minutes {
            format!("Meets {target}")
        } else {
            format!("Below {target}")
        }
    ));
    if flags.missing_reports {
        parts.push("Warning: missing report links for some clients.".to_string());
    }
    if flags.has_escalations {
        parts.push("Warning: escalations present, investigate.".to_string());
    }
    parts.push(format!(
        "Scores: KPI {}/10, Learning {}/10, Client Status {}/10, Overall {}/10.",
        scores.kpi_score, scores.learning_score, scores.relationship_score, scores.overall
    ));
    if submission.manager.score > 0.0 {
        parts.push(format!("Manager Score: {}/10", submission.manager.score));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{Client, LearningEntry, Meeting, ProofEntry, ReportLink};

    fn submission() -> Submission {
        let mut acme = Client {
            name: "Acme".to_string(),
            reports: vec![ReportLink {
                label: "Feb".to_string(),
                url: "https://drive.google.com/x".to_string(),
            }],
            ..Client::default()
        };
        acme.relationship.meetings = vec![Meeting::default(); 2];
        acme.relationship.appreciations = vec![ProofEntry::default()];

        Submission {
            clients: vec![acme],
            learning: vec![LearningEntry {
                title: "Course".to_string(),
                duration_mins: 390.0,
            }],
            ..Submission::default()
        }
    }

    #[test]
    fn test_flags_for_clean_submission() {
        let flags = compute_flags(&submission(), 360.0);
        assert_eq!(flags, Flags::default());
    }

    #[test]
    fn test_flags_detect_problems() {
        let mut submission = submission();
        submission.learning.clear();
        submission.clients[0].relationship.escalations = vec![ProofEntry::default()];
        submission.clients.push(Client {
            name: "Globex".to_string(),
            ..Client::default()
        });

        let flags = compute_flags(&submission, 360.0);
        assert!(flags.missing_learning_hours);
        assert!(flags.has_escalations);
        assert!(flags.missing_reports);
    }

    #[test]
    fn test_summary_text() {
        let submission = submission();
        let scores = Scores {
            kpi_score: 8.0,
            learning_score: 10.0,
            relationship_score: 2.4,
            overall: 6.7,
        };
        let summary = generate_summary(&submission, &scores, &Flags::default(), 360.0);
        assert_eq!(
            summary,
            "Handled 1 client(s): Acme. Meetings 2, Appreciations 1, Escalations 0. \
             Learning: 6.5h (Meets 6h). \
             Scores: KPI 8/10, Learning 10/10, Client Status 2.4/10, Overall 6.7/10."
        );
    }

    #[test]
    fn test_summary_warnings_and_manager_score() {
        let mut submission = Submission::default();
        submission.manager.score = 7.5;
        let flags = Flags {
            missing_learning_hours: true,
            has_escalations: true,
            missing_reports: true,
        };
        let summary = generate_summary(&submission, &Scores::default(), &flags, 450.0);
        assert!(summary.starts_with("Handled 0 client(s): none."));
        assert!(summary.contains("Learning: 0.0h (Below 7.5h)."));
        assert!(summary.contains("Warning: missing report links"));
        assert!(summary.contains("Warning: escalations present"));
        assert!(summary.ends_with("Manager Score: 7.5/10"));
    }
}
