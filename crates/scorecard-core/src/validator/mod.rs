//! Submission validator.
//!
//! Validation never fails fast: every rule runs and every violation is
//! collected, in a fixed order, as a message ready to show to the employee.
//! Rules run in four groups:
//!
//! 1. profile: name, department, role, report month, phone
//! 2. attendance and task proof
//! 3. client list presence for the department
//! 4. per-client rules: name, proof reports, department rules, relationship

mod client;
mod profile;
mod relationship;

use regex::Regex;

use crate::config::{ConfigError, ValidationConfig};
use crate::patterns::{DRIVE_PATTERN, GENSPARK_PATTERN};
use crate::submission::Submission;
use crate::types::{Department, ValidationResult};

/// Checks submissions against the reporting rules.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidationConfig,
    report_hosts: Vec<Regex>,
    drive: Regex,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            config: ValidationConfig::default(),
            report_hosts: vec![DRIVE_PATTERN.clone(), GENSPARK_PATTERN.clone()],
            drive: DRIVE_PATTERN.clone(),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl Validator {
    /// Build a validator, compiling the configured host patterns.
    pub fn from_config(config: ValidationConfig) -> Result<Self, ConfigError> {
        let report_hosts = config
            .report_host_patterns
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>, _>>()?;
        let drive = compile(&config.drive_pattern)?;

        Ok(Self {
            config,
            report_hosts,
            drive,
        })
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a submission, collecting every violation.
    ///
    /// # Arguments
    ///
    /// * `submission` - The submission to check, normally after `normalize`
    ///
    /// # Returns
    ///
    /// `ok` with no errors, or every user-facing message in form order:
    /// profile, attendance, tasks, the client list, then each client.
    pub fn validate(&self, submission: &Submission) -> ValidationResult {
        let mut errors = Vec::new();

        profile::check_profile(submission, &mut errors);
        profile::check_attendance(submission, self.config.max_attendance_days, &mut errors);
        profile::check_tasks(submission, &self.drive, &mut errors);
        self.check_client_list(submission, &mut errors);

        for (index, client) in submission.clients.iter().enumerate() {
            client::check_client(self, submission, index, client, &mut errors);
        }

        ValidationResult::from_errors(errors)
    }

    fn is_internal(&self, department: &Department) -> bool {
        self.config.internal_departments.contains(department)
    }

    fn check_client_list(&self, submission: &Submission, errors: &mut Vec<String>) {
        if !submission.clients.is_empty() {
            return;
        }
        let exempt = match submission.employee.department.as_ref() {
            Some(Department::WebHead) | Some(Department::OperationsHead) => true,
            Some(department) => self.is_internal(department),
            None => false,
        };
        if !exempt {
            errors.push("Add at least one Client for this department.".to_string());
        }
    }

    fn is_report_host(&self, url: &str) -> bool {
        self.report_hosts.iter().any(|host| host.is_match(url))
    }
}

/// Validate with the default rules.
pub fn validate(submission: &Submission) -> ValidationResult {
    Validator::default().validate(submission)
}
