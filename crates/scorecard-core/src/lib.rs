//! # scorecard-core
//!
//! Deterministic monthly performance scoring and submission validation.
//!
//! Each month an employee files a [`Submission`]: profile, attendance,
//! learning, and per-client activity for their department. This crate
//! answers:
//! - Is the submission complete and well-formed?
//! - How did the employee do on their department's KPIs, learning and
//!   client relationships?
//! - What is the overall score?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same submissions in, same scores out
//! 2. **Total**: malformed fields decode to empty values and are reported by
//!    the validator; scoring never fails
//! 3. **Bounded**: every score lies in `[0, 10]` with one decimal
//!
//! ## Example
//!
//! ```rust,ignore
//! use scorecard_core::{Engine, Submission};
//!
//! let current = Submission::from_file("2024-03.json")?;
//! let previous = Submission::from_file("2024-02.json").ok();
//! let evaluation = Engine::default().evaluate(&current, previous.as_ref());
//!
//! if !evaluation.validation.ok {
//!     for error in &evaluation.validation.errors {
//!         println!("- {error}");
//!     }
//! }
//! println!("Overall {}/10", evaluation.scores.overall);
//! ```

pub mod calendar;
pub mod composite;
pub mod config;
mod lenient;
pub mod learning;
pub mod patterns;
pub mod relationship;
pub mod scope;
pub mod scorers;
pub mod submission;
pub mod summary;
pub mod types;
pub mod validator;

// Re-export main types at crate root
pub use calendar::DisciplinePenalty;
pub use composite::{overall, round1, Aggregator};
pub use config::{
    CompositeWeights, ConfigError, EngineConfig, RelationshipWeights, ScoringConfig,
    ValidationConfig,
};
pub use learning::score_learning;
pub use relationship::score_relationship;
pub use scope::{completion, scope_score, ScopeCompletion};
pub use scorers::{score_kpi, scorer_for, KpiScorer};
pub use submission::{normalize, Client, Employee, Submission, SubmissionError};
pub use summary::{compute_flags, generate_summary};
pub use types::{ClientStatus, Department, Flags, Scores, ServiceKind, ValidationResult};
pub use validator::{validate, Validator};

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from the file-level entry points.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Everything computed for one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub month_key: String,

    pub employee: String,

    pub department: Option<Department>,

    pub validation: ValidationResult,

    pub scores: Scores,

    pub flags: Flags,

    /// Completion per client and contracted service
    pub scope_completion: Vec<ScopeCompletion>,

    pub summary: String,

    /// Late-submission penalty; reported only, not part of `scores`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<DisciplinePenalty>,

    pub evaluated_at: DateTime<Utc>,
}

/// The scoring engine: a configured validator plus scoring settings.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    validator: Validator,
    scoring: ScoringConfig,
}

impl Engine {
    /// Build an engine from configuration, rejecting bad patterns and
    /// weights.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let validator = config
            .check()
            .and_then(|()| Validator::from_config(config.validation))
            .inspect_err(|error| warn!(%error, "rejected engine configuration"))?;

        Ok(Self {
            validator,
            scoring: config.scoring,
        })
    }

    /// Build an engine from a YAML or JSON config file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let config = EngineConfig::from_file(path)?;
        Ok(Self::new(config)?)
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Validate a submission as given.
    pub fn validate(&self, submission: &Submission) -> ValidationResult {
        self.validator.validate(submission)
    }

    /// Score an already-normalized submission.
    ///
    /// # Arguments
    ///
    /// * `submission` - A submission whose `Prev` values are already filled in
    ///
    /// # Returns
    ///
    /// KPI, learning, relationship and overall scores, each in `[0, 10]` with
    /// one decimal. Validation problems never stop scoring.
    pub fn score(&self, submission: &Submission) -> Scores {
        let kpi = score_kpi(&submission.employee, &submission.clients);
        let learning = learning::score_learning_with_target(
            &submission.learning,
            self.scoring.learning_target_minutes,
        );
        let relationship =
            relationship::score_relationship_with(&submission.clients, &self.scoring.relationship);

        Aggregator::new(self.scoring.composite).scores(
            kpi,
            learning,
            relationship,
            submission.manager.score,
        )
    }

    /// Normalize against last month, then validate, score and summarise.
    ///
    /// # Arguments
    ///
    /// * `current` - The submission being evaluated
    /// * `previous` - Last month's submission for the same employee, if any.
    ///   Its `This` values become the growth baselines of matching clients.
    ///
    /// # Returns
    ///
    /// An `Evaluation` containing:
    /// - The validation result (every problem, in form order)
    /// - The four scores and the flags
    /// - Scope completion per client and service
    /// - The plain-text summary and any discipline penalty
    pub fn evaluate(&self, current: &Submission, previous: Option<&Submission>) -> Evaluation {
        if let Some(previous) = previous.filter(|p| out_of_sequence(current, p)) {
            warn!(
                month = %current.month_key.trim(),
                previous_month = %previous.month_key.trim(),
                "previous submission is not from the preceding month"
            );
        }

        let submission = normalize(current, previous);
        let validation = self.validate(&submission);
        let scores = self.score(&submission);
        let flags = compute_flags(&submission, self.scoring.learning_target_minutes);
        let summary = generate_summary(
            &submission,
            &scores,
            &flags,
            self.scoring.learning_target_minutes,
        );
        let discipline = submission.submitted_at.and_then(|at| {
            calendar::discipline_penalty(&submission.month_key, at, self.scoring.discipline_grace_days)
        });

        debug!(
            month = %submission.month_key,
            employee = %submission.employee.name,
            department = ?submission.employee.department,
            clients = submission.clients.len(),
            has_previous = previous.is_some(),
            valid = validation.ok,
            errors = validation.errors.len(),
            kpi = scores.kpi_score,
            overall = scores.overall,
            "evaluated submission"
        );

        Evaluation {
            scope_completion: scope::completion_table(&submission.clients),
            month_key: submission.month_key,
            employee: submission.employee.name,
            department: submission.employee.department,
            validation,
            scores,
            flags,
            summary,
            discipline,
            evaluated_at: Utc::now(),
        }
    }

    /// The normalized submission with `scores` and `flags` recomputed.
    ///
    /// Rescoring a rescored submission with the same previous month changes
    /// nothing.
    pub fn rescore(&self, current: &Submission, previous: Option<&Submission>) -> Submission {
        let mut submission = normalize(current, previous);
        submission.scores = self.score(&submission);
        submission.flags = compute_flags(&submission, self.scoring.learning_target_minutes);
        submission
    }

    /// Read, schema-check and evaluate submission files.
    ///
    /// # Arguments
    ///
    /// * `current` - Path to this month's submission (JSON, or YAML for
    ///   `.yaml`/`.yml`)
    /// * `previous` - Path to last month's submission, if any
    ///
    /// # Returns
    ///
    /// The evaluation, or `EngineError::Submission` when either file cannot
    /// be read, parsed or passed through the schema.
    pub fn evaluate_files(
        &self,
        current: impl AsRef<Path>,
        previous: Option<&Path>,
    ) -> Result<Evaluation, EngineError> {
        let current = load_submission(current)?;
        let previous = previous.map(|path| load_submission(path)).transpose()?;
        Ok(self.evaluate(&current, previous.as_ref()))
    }
}

/// Read a submission file, checking it against the submission schema before
/// decoding.
///
/// # Arguments
///
/// * `path` - A `.json`, `.yaml` or `.yml` file
///
/// # Returns
///
/// The decoded submission, or an error carrying every schema violation.
pub fn load_submission(path: impl AsRef<Path>) -> Result<Submission, EngineError> {
    let document = submission::read_document(path)?;
    Ok(Submission::from_json_value_checked(document)?)
}

/// Evaluate with the default configuration.
///
/// # Arguments
///
/// * `current` - The submission being evaluated
/// * `previous` - Last month's submission, if any
///
/// # Returns
///
/// The same `Evaluation` as `Engine::default().evaluate(..)`.
pub fn evaluate(current: &Submission, previous: Option<&Submission>) -> Evaluation {
    Engine::default().evaluate(current, previous)
}

/// True when both month keys are set and `previous` is not the month before
/// `current`.
fn out_of_sequence(current: &Submission, previous: &Submission) -> bool {
    let previous_key = previous.month_key.trim();
    match calendar::previous_month_key(current.month_key.trim()) {
        Some(expected) => !previous_key.is_empty() && previous_key != expected,
        None => false,
    }
}
