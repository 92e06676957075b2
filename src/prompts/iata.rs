use super::PromptSpec;
use crate::types::{IataAnswer, NOT_AVAILABLE};

/// Ask for the airport code most commonly associated with a city.
pub fn iata_lookup_prompt(city_name: &str) -> PromptSpec {
    let text = format!(
        "What is the 3-letter IATA airport code for '{city_name}'? \
         Respond with only the 3-letter code (e.g., 'BOM', 'LAX', 'DPS'). \
         If no specific airport code is commonly associated, respond with '{NOT_AVAILABLE}'."
    );
    PromptSpec::for_response::<IataAnswer>(text)
}
