use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Structured travel plan produced by the generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedPlan {
    /// Trip-wide advice that does not belong to a single day
    pub general_info: GeneralInfo,
    /// Day-by-day itinerary in travel order
    pub days: Vec<DayPlan>,
}

crate::response_schema!(GeneratedPlan, "GeneratedPlan");

/// Trip-wide notes. Every field is free text and may be omitted by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneralInfo {
    /// How to convert money, quoting the supplied rate verbatim when one was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_conversion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_insurance_tips: Option<String>,
    /// Typical local taxi fares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approx_taxi_costs: Option<String>,
    /// Local customs, safety advice, best time to visit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_tips: Option<String>,
}

/// One itinerary day. All five fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DayPlan {
    /// 1-based day counter
    #[schemars(with = "f64")]
    pub day_number: Number,
    /// Short theme, e.g. "Arrival in Bali & Kuta Exploration"
    pub title: String,
    /// Activities in chronological order
    pub activities: Vec<String>,
    /// Hotel close to the day's sights
    pub accommodation: String,
    /// Food and restaurant recommendations
    pub food: String,
}
