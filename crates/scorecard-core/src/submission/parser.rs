//! Submission parsing from JSON/YAML.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use super::model::Submission;
use super::schema::validate_submission_schema;

/// Errors that can occur when reading a submission document.
///
/// Field-level problems never surface here; they decode to empty values and
/// are reported by the validator instead.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Failed to read submission file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Submission must be an object, found {0}")]
    NotAnObject(&'static str),

    #[error("Submission does not match schema: {}", .0.join("; "))]
    SchemaError(Vec<String>),
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Submission {
    /// Decode a submission from an already-parsed document.
    pub fn from_json_value(value: Value) -> Result<Self, SubmissionError> {
        if !value.is_object() {
            return Err(SubmissionError::NotAnObject(kind_of(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Check the document against the submission schema, then decode it.
    pub fn from_json_value_checked(value: Value) -> Result<Self, SubmissionError> {
        validate_submission_schema(&value).map_err(SubmissionError::SchemaError)?;
        Self::from_json_value(value)
    }

    /// Parse a submission from JSON string.
    pub fn from_json(json: &str) -> Result<Self, SubmissionError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Parse a submission from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SubmissionError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_json_value(value)
    }

    /// Read a submission file. `.yaml`/`.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SubmissionError> {
        Self::from_json_value(read_document(path)?)
    }

    /// Pretty-printed JSON in the external (flat, camelCase) shape.
    pub fn to_json_pretty(&self) -> Result<String, SubmissionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read a JSON or YAML file into a raw document, choosing the format by
/// extension.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value, SubmissionError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    if is_yaml_path(path) {
        Ok(serde_yaml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

pub(crate) fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
