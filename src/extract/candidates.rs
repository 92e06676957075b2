use serde_json::Value;
use tracing::error;

use crate::error::{Result, TravelError};

/// Pull the generated JSON document out of a `generateContent` response.
///
/// The provider wraps its output as `candidates[0].content.parts[0].text`,
/// where the text is itself JSON because the request asked for
/// `application/json`.
pub fn extract_generated_json(provider: &'static str, raw: Value) -> Result<Value> {
    let first_part = raw
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .and_then(|parts| parts.first());

    let Some(first_part) = first_part else {
        return Err(TravelError::NoCandidates(provider));
    };

    let Some(text) = first_part.get("text").and_then(Value::as_str) else {
        error!(provider, raw = %raw, "first content part carries no text");
        return Err(TravelError::MalformedProviderJson {
            provider,
            message: "first content part carries no text".to_string(),
            raw,
        });
    };

    match serde_json::from_str(text) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            error!(provider, error = %err, raw = %raw, "generated content is not valid JSON");
            Err(TravelError::MalformedProviderJson {
                provider,
                message: err.to_string(),
                raw,
            })
        }
    }
}
