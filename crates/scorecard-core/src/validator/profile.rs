//! Profile, attendance and task rules.

use regex::Regex;

use crate::calendar::{days_in_month, month_label, parse_month_key};
use crate::patterns::{is_http_url, is_phone_number};
use crate::submission::Submission;

pub(super) fn check_profile(submission: &Submission, errors: &mut Vec<String>) {
    let employee = &submission.employee;

    if employee.name.trim().is_empty() {
        errors.push("Enter your Name.".to_string());
    }
    if employee.department.is_none() {
        errors.push("Select Department.".to_string());
    }
    if employee.role.iter().all(|role| role.trim().is_empty()) {
        errors.push("Select at least one Role.".to_string());
    }

    let month_key = submission.month_key.trim();
    if month_key.is_empty() {
        errors.push("Pick Report Month (YYYY-MM).".to_string());
    } else if parse_month_key(month_key).is_none() {
        errors.push("Report Month must use the YYYY-MM format.".to_string());
    }

    if !is_phone_number(employee.phone.trim()) {
        errors.push("Enter a valid 10-digit Phone Number.".to_string());
    }
}

pub(super) fn check_attendance(submission: &Submission, max_days: u32, errors: &mut Vec<String>) {
    let attendance = &submission.meta.attendance;
    let max = f64::from(max_days);

    if !(0.0..=max).contains(&attendance.wfo) {
        errors.push(format!("WFO days must be between 0 and {max_days}."));
    }
    if !(0.0..=max).contains(&attendance.wfh) {
        errors.push(format!("WFH days must be between 0 and {max_days}."));
    }

    let month_key = submission.month_key.trim();
    let days = days_in_month(month_key);
    if attendance.wfo + attendance.wfh > f64::from(days) {
        let label = match month_label(month_key) {
            label if label.is_empty() => "this month".to_string(),
            label => label,
        };
        errors.push(format!(
            "Attendance total (WFO+WFH) cannot exceed {days} for {label}."
        ));
    }
}

pub(super) fn check_tasks(submission: &Submission, drive: &Regex, errors: &mut Vec<String>) {
    let tasks = &submission.meta.tasks;
    let link = tasks.ai_table_link.trim();
    let screenshot = tasks.ai_table_screenshot.trim();

    if tasks.count > 0.0 && link.is_empty() && screenshot.is_empty() {
        errors.push(
            "If tasks were completed, please provide an AI table link or a Drive screenshot."
                .to_string(),
        );
    }
    if !link.is_empty() && !is_http_url(link) {
        errors.push("The AI table link must be a valid URL.".to_string());
    }
    if !screenshot.is_empty() && !drive.is_match(screenshot) {
        errors.push("The AI table screenshot must be a valid Google Drive URL.".to_string());
    }
}
