//! Previous-period carry-forward.

use super::model::Submission;

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Produce the submission as it should be scored.
///
/// Identity fields and client names are trimmed and blank roles dropped.
/// For every client also present in `previous` (matched by name, ignoring
/// case and surrounding whitespace) each `Prev` metric is replaced by last
/// month's `This` value. Clients new this month, and every client when there
/// is no previous submission, keep the `Prev` values they were entered with.
pub fn normalize(current: &Submission, previous: Option<&Submission>) -> Submission {
    let mut normalized = current.clone();

    trim_in_place(&mut normalized.month_key);
    trim_in_place(&mut normalized.employee.name);
    trim_in_place(&mut normalized.employee.phone);
    normalized.employee.role = normalized
        .employee
        .role
        .iter()
        .map(|role| role.trim())
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .collect();

    for client in &mut normalized.clients {
        trim_in_place(&mut client.name);
        if let Some(last_month) = previous.and_then(|p| p.client_named(&client.name)) {
            client.carry_forward(last_month);
        }
    }

    normalized
}
