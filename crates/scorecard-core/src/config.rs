//! Engine configuration.
//!
//! Every section falls back to the built-in defaults, so a config file only
//! needs the values it changes:
//!
//! ```yaml
//! scoring:
//!   learning_target_minutes: 480
//! validation:
//!   max_attendance_days: 26
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::patterns::{DRIVE_URL, GENSPARK_URL};
use crate::submission::is_yaml_path;
use crate::types::Department;

/// Errors that can occur when loading or checking configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidWeight { name: &'static str, value: f64 },
}

/// Top-level configuration for the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub validation: ValidationConfig,
    pub scoring: ScoringConfig,
}

impl EngineConfig {
    /// Parse a config from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Parse a config from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Read a config file, YAML for `.yaml`/`.yml` and JSON otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        if is_yaml_path(path) {
            Self::from_yaml(&contents)
        } else {
            Self::from_json(&contents)
        }
    }

    /// Reject numeric settings that would push scores out of `[0, 10]`.
    ///
    /// Patterns are compiled (and rejected) when the validator is built.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.scoring.check()
    }
}

/// Settings for the submission validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Departments that report without client entries
    pub internal_departments: Vec<Department>,

    /// Accepted hosts for client proof reports
    pub report_host_patterns: Vec<String>,

    /// Host required for screenshots, meeting notes and relationship proofs
    pub drive_pattern: String,

    /// Upper bound for each of WFO and WFH
    pub max_attendance_days: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            internal_departments: vec![
                Department::Hr,
                Department::Accounts,
                Department::Sales,
                Department::Blended,
            ],
            report_host_patterns: vec![DRIVE_URL.to_string(), GENSPARK_URL.to_string()],
            drive_pattern: DRIVE_URL.to_string(),
            max_attendance_days: 31,
        }
    }
}

/// Settings for the scorers and the composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Learning minutes that earn a full learning score
    pub learning_target_minutes: f64,

    pub composite: CompositeWeights,

    pub relationship: RelationshipWeights,

    /// Days after month end before a submission counts as late
    pub discipline_grace_days: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            learning_target_minutes: 360.0,
            composite: CompositeWeights::default(),
            relationship: RelationshipWeights::default(),
            discipline_grace_days: 3,
        }
    }
}

impl ScoringConfig {
    fn check(&self) -> Result<(), ConfigError> {
        if !(self.learning_target_minutes.is_finite() && self.learning_target_minutes > 0.0) {
            return Err(ConfigError::InvalidWeight {
                name: "learning_target_minutes",
                value: self.learning_target_minutes,
            });
        }
        self.composite.check()?;
        self.relationship.check()
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight { name, value })
    }
}

/// Weights of the overall score. They must sum to at most 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    pub kpi: f64,
    pub learning: f64,
    pub relationship: f64,
    pub manager: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            kpi: 0.4,
            learning: 0.3,
            relationship: 0.2,
            manager: 0.1,
        }
    }
}

impl CompositeWeights {
    pub fn total(&self) -> f64 {
        self.kpi + self.learning + self.relationship + self.manager
    }

    fn check(&self) -> Result<(), ConfigError> {
        non_negative("composite.kpi", self.kpi)?;
        non_negative("composite.learning", self.learning)?;
        non_negative("composite.relationship", self.relationship)?;
        non_negative("composite.manager", self.manager)?;

        let total = self.total();
        if total > 1.0 + 1e-9 {
            return Err(ConfigError::InvalidWeight {
                name: "composite (sum)",
                value: total,
            });
        }
        Ok(())
    }
}

/// Per-item weights and caps of the relationship score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipWeights {
    pub meeting_weight: f64,
    pub meeting_cap: f64,
    pub appreciation_weight: f64,
    pub appreciation_cap: f64,
    pub satisfaction_weight: f64,
    pub satisfaction_cap: f64,
    pub escalation_weight: f64,
    pub escalation_cap: f64,
}

impl Default for RelationshipWeights {
    fn default() -> Self {
        Self {
            meeting_weight: 0.8,
            meeting_cap: 4.0,
            appreciation_weight: 0.75,
            appreciation_cap: 3.0,
            satisfaction_weight: 0.3,
            satisfaction_cap: 3.0,
            escalation_weight: 1.5,
            escalation_cap: 5.0,
        }
    }
}

impl RelationshipWeights {
    fn check(&self) -> Result<(), ConfigError> {
        non_negative("relationship.meeting_weight", self.meeting_weight)?;
        non_negative("relationship.meeting_cap", self.meeting_cap)?;
        non_negative("relationship.appreciation_weight", self.appreciation_weight)?;
        non_negative("relationship.appreciation_cap", self.appreciation_cap)?;
        non_negative("relationship.satisfaction_weight", self.satisfaction_weight)?;
        non_negative("relationship.satisfaction_cap", self.satisfaction_cap)?;
        non_negative("relationship.escalation_weight", self.escalation_weight)?;
        non_negative("relationship.escalation_cap", self.escalation_cap)
    }
}
