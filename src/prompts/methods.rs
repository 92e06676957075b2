use super::PromptSpec;
use crate::types::MethodSuggestion;

/// Ask which travel modes make sense between two places.
pub fn method_suggestion_prompt(origin: &str, destination: &str) -> PromptSpec {
    let text = format!(
        "Given a trip from {origin} to {destination}, what are the most common and logical methods of travel? \
         Consider if it's international, domestic, or coastal. \
         Respond with a comma-separated list of methods (e.g., 'flight, train, car' or 'flight, cruise')."
    );
    PromptSpec::for_response::<MethodSuggestion>(text)
}
