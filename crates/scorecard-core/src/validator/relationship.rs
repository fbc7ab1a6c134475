//! Client relationship rules.

use crate::calendar::is_valid_date;
use crate::submission::{Client, ProofEntry};

use super::client::ClientLabel;
use super::Validator;

fn present_and_invalid(date: &str) -> bool {
    let date = date.trim();
    !date.is_empty() && !is_valid_date(date)
}

pub(super) fn check_relationship(
    validator: &Validator,
    client: &Client,
    label: &ClientLabel,
    errors: &mut Vec<String>,
) {
    let relationship = &client.relationship;
    let name = &label.short;
    let off_drive = |url: &str| {
        let url = url.trim();
        !url.is_empty() && !validator.drive.is_match(url)
    };
    let any_off_drive = |proofs: &[ProofEntry]| proofs.iter().any(|p| off_drive(p.url.as_str()));

    if present_and_invalid(&relationship.roadmap_sent_date) {
        errors.push(format!("{name}: Roadmap Sent Date is not a valid date."));
    }
    if present_and_invalid(&relationship.report_sent_date) {
        errors.push(format!("{name}: Report Sent Date is not a valid date."));
    }
    if relationship.meetings.iter().any(|m| off_drive(m.notes_link.as_str())) {
        errors.push(format!(
            "{name}: Meeting notes links must be valid Google Drive URLs."
        ));
    }
    if relationship.payment_received && !is_valid_date(relationship.payment_date.trim()) {
        errors.push(format!(
            "{name}: Payment date is required when payment is marked as received."
        ));
    }

    let satisfaction = relationship.client_satisfaction;
    if satisfaction != 0.0 && !(1.0..=10.0).contains(&satisfaction) {
        errors.push(format!("{name}: Client satisfaction must be between 1 and 10."));
    }
    if any_off_drive(relationship.appreciations.as_slice()) {
        errors.push(format!(
            "{name}: Appreciation proof links must be valid Google Drive/Docs URLs."
        ));
    }
    if any_off_drive(relationship.escalations.as_slice()) {
        errors.push(format!(
            "{name}: Escalation proof links must be valid Google Drive/Docs URLs."
        ));
    }
}
