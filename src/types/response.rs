use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{Result, TravelError},
    schemas::ResponseSchema,
};

/// Decode a provider payload into its response type, naming the failing path.
pub fn deserialize_structured_response<T>(payload: Value) -> Result<T>
where
    T: ResponseSchema,
{
    let schema = T::schema();
    serde_path_to_error::deserialize(payload).map_err(|err| {
        TravelError::SchemaViolation(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            describe_path(&err.path().to_string()),
            err.inner()
        ))
    })
}

/// Decode a client body; type mismatches are the client's fault.
pub fn decode_request<T>(body: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(body).map_err(|err| {
        TravelError::InvalidRequest(format!(
            "field {} is malformed: {}",
            describe_path(&err.path().to_string()),
            err.inner()
        ))
    })
}

fn describe_path(path: &str) -> String {
    if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GeneratedPlan, MethodSuggestion, TravelRequest};
    use serde_json::json;

    #[test]
    fn test_missing_day_field_names_the_path() {
        let payload = json!({
            "general_info": {},
            "days": [{"day_number": 1, "title": "Arrival", "activities": [], "accommodation": "Hotel"}]
        });

        let err = deserialize_structured_response::<GeneratedPlan>(payload).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("GeneratedPlan"), "{message}");
        assert!(message.contains("days[0]"), "{message}");
        assert!(message.contains("food"), "{message}");
    }

    #[test]
    fn test_methods_default_to_empty() {
        let suggestion: MethodSuggestion = deserialize_structured_response(json!({})).unwrap();
        assert!(suggestion.methods.is_empty());
    }

    #[test]
    fn test_decode_request_reports_bad_field() {
        let err = decode_request::<TravelRequest>(json!({"origin": 42})).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("origin"));
    }
}
