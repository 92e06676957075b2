use crate::{error::TravelError, schemas::SchemaHandle};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

/// Violations listed before the report is cut short.
const MAX_REPORTED_VIOLATIONS: usize = 3;

/// Check a decoded provider payload against the response type's JSON Schema.
pub(crate) fn validate_structured_payload(
    schema: &SchemaHandle,
    payload: &Value,
) -> Result<(), TravelError> {
    let compiled = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            TravelError::Unknown(format!(
                "schema `{}` failed to compile: {}",
                schema.schema_name(),
                err
            ))
        })?;

    let violations: Vec<String> = match compiled.validate(payload) {
        Ok(()) => return Ok(()),
        Err(errors) => errors
            .take(MAX_REPORTED_VIOLATIONS + 1)
            .map(|error| {
                let location = error.instance_path.to_string();
                let location = if location.is_empty() {
                    "<root>".to_string()
                } else {
                    location
                };
                format!("{}: {}", location, error)
            })
            .collect(),
    };

    let mut report = violations
        .iter()
        .take(MAX_REPORTED_VIOLATIONS)
        .cloned()
        .collect::<Vec<_>>()
        .join("; ");
    if violations.len() > MAX_REPORTED_VIOLATIONS {
        report.push_str("; additional errors truncated");
    }

    Err(TravelError::SchemaViolation(format!(
        "Provider response does not match `{}` schema: {}",
        schema.schema_name(),
        report
    )))
}
