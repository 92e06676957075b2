//! Prompt builders for each LLM-backed use case.
//!
//! Every builder is a pure function of its input and returns the instruction
//! text together with the response-schema descriptor that constrains the
//! provider's JSON output.

pub mod iata;
pub mod methods;
pub mod plan;

use serde_json::Value;

use crate::schemas::ResponseSchema;

pub use iata::iata_lookup_prompt;
pub use methods::method_suggestion_prompt;
pub use plan::plan_prompt;

/// Prompt text plus the output schema the provider must honour.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub text: String,
    pub schema: Value,
}

impl PromptSpec {
    pub fn for_response<T: ResponseSchema>(text: String) -> Self {
        Self {
            text,
            schema: T::schema().descriptor().clone(),
        }
    }
}
