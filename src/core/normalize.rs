//! Result Normalizer: schema check, sanitize, then typed decode.

use serde_json::Value;

use crate::{
    error::Result,
    sanitize::clean,
    schemas::{validation::validate_structured_payload, ResponseSchema},
    types::deserialize_structured_response,
};

/// A provider document that passed its contract check.
///
/// `document` is the cleaned output exactly as the model shaped it, extra
/// keys and explicit nulls included; `value` is the typed reading of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub value: T,
    pub document: Value,
}

/// Validate, clean and decode a parsed provider document.
///
/// The raw document is checked against the type's schema first so a
/// violation reports the provider's own output, not the cleaned copy.
pub fn normalize_document<T: ResponseSchema>(parsed: Value) -> Result<Normalized<T>> {
    validate_structured_payload(T::schema(), &parsed)?;
    let document = clean(parsed);
    let value = deserialize_structured_response(document.clone())?;
    Ok(Normalized { value, document })
}

/// Like [`normalize_document`] when only the typed value is needed.
pub fn normalize_response<T: ResponseSchema>(parsed: Value) -> Result<T> {
    normalize_document(parsed).map(|normalized| normalized.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GeneratedPlan, IataAnswer, MethodSuggestion};
    use serde_json::json;

    #[test]
    fn test_plan_strings_are_cleaned() {
        let parsed = json!({
            "general_info": {"other_tips": "**Carry** cash  for   markets"},
            "days": [{
                "day_number": 1,
                "title": "## Arrival",
                "activities": ["- Check in", "*Sunset* at Kuta"],
                "accommodation": "Hotel   Kuta",
                "food": "Warung #1"
            }]
        });

        let plan: GeneratedPlan = normalize_response(parsed).unwrap();
        assert_eq!(
            plan.general_info.other_tips.as_deref(),
            Some("Carry cash for markets")
        );
        let day = &plan.days[0];
        assert_eq!(day.title, "Arrival");
        assert_eq!(day.activities, vec!["Check in", "Sunset at Kuta"]);
        assert_eq!(day.accommodation, "Hotel Kuta");
        assert_eq!(day.food, "Warung 1");
        assert_eq!(day.day_number.as_u64(), Some(1));
    }

    #[test]
    fn test_document_keeps_unmodelled_keys() {
        let parsed = json!({
            "summary": "*Island* hopping",
            "general_info": {"visa_info": "**VoA** on arrival", "other_tips": null},
            "days": [{
                "day_number": 1,
                "title": "Arrival",
                "activities": [],
                "accommodation": "Hotel",
                "food": "Satay",
                "transport": "## Scooter"
            }]
        });

        let normalized: Normalized<GeneratedPlan> = normalize_document(parsed).unwrap();
        let document = &normalized.document;
        assert_eq!(document["summary"], "Island hopping");
        assert_eq!(document["general_info"]["visa_info"], "VoA on arrival");
        assert_eq!(document["general_info"]["other_tips"], Value::Null);
        assert!(document["general_info"]
            .as_object()
            .unwrap()
            .contains_key("other_tips"));
        assert_eq!(document["days"][0]["transport"], "Scooter");
        assert_eq!(normalized.value.days[0].title, "Arrival");
    }

    #[test]
    fn test_day_missing_field_is_schema_violation() {
        let parsed = json!({
            "general_info": {},
            "days": [{"day_number": 1, "title": "Arrival", "activities": [], "food": "Satay"}]
        });
        let err = normalize_response::<GeneratedPlan>(parsed).unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_VIOLATION");
        assert!(err.to_string().contains("accommodation"), "{err}");
    }

    #[test]
    fn test_missing_top_level_key_is_schema_violation() {
        let err = normalize_response::<GeneratedPlan>(json!({"days": []})).unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_VIOLATION");
    }

    #[test]
    fn test_small_answers_are_cleaned() {
        let methods: MethodSuggestion =
            normalize_response(json!({"methods": ["**flight**", "- train"]})).unwrap();
        assert_eq!(methods.methods, vec!["flight", "train"]);

        let answer: IataAnswer = normalize_response(json!({"iata_code": " #dps "})).unwrap();
        assert_eq!(answer.code(), "DPS");
    }
}
