//! JSON Schema check for raw submission documents.
//!
//! Decoding is lenient, so this is the only place a structurally wrong
//! document (an `employee` that is a string, `clients` that is an object)
//! is reported before it silently decodes to empty values.

use std::sync::OnceLock;

use serde_json::Value;

/// Embedded submission schema (loaded at compile time).
const SUBMISSION_SCHEMA_JSON: &str = include_str!("../../../../schema/submission.schema.json");

static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

fn get_validator() -> Result<&'static jsonschema::Validator, String> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: Value = serde_json::from_str(SUBMISSION_SCHEMA_JSON)
            .map_err(|e| format!("Invalid schema JSON: {}", e))?;

        jsonschema::options()
            .build(&schema_value)
            .map_err(|e| format!("Failed to compile schema: {}", e))
    });

    result.as_ref().map_err(Clone::clone)
}

/// Validate a raw submission document against the schema.
///
/// Returns every violation, each suffixed with the JSON pointer of the
/// offending value.
pub fn validate_submission_schema(document: &Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e])?;

    let errors: Vec<String> = validator
        .iter_errors(document)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check if a raw submission document matches the schema.
pub fn is_valid_submission(document: &Value) -> bool {
    get_validator()
        .map(|v| v.is_valid(document))
        .unwrap_or(false)
}
