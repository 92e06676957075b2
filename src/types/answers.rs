//! Small structured answers from the LLM provider.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::NOT_AVAILABLE;

/// Plausible ways to make a trip, e.g. `["flight", "train"]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MethodSuggestion {
    #[serde(default)]
    pub methods: Vec<String>,
}

crate::response_schema!(MethodSuggestion, "MethodSuggestion");

/// Airport code answer; the model says `N/A` when no code applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IataAnswer {
    /// Three-letter IATA code or "N/A"
    #[serde(default)]
    pub iata_code: Option<String>,
}

crate::response_schema!(IataAnswer, "IataAnswer");

impl IataAnswer {
    /// Normalised code: trimmed, upper-cased, `N/A` when missing.
    pub fn code(&self) -> String {
        self.iata_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_uppercase()
    }
}
