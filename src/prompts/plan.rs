use super::PromptSpec;
use crate::types::{GeneratedPlan, TripDetails};

const FLIGHT: &str = "flight";
const CRUISE: &str = "cruise";

/// Closing instructions shared by every plan prompt.
const OUTPUT_INSTRUCTIONS: [&str; 5] = [
    "The plan should cover daily activities, recommended hotels close to tourist places, specific food recommendations (including restaurants if possible), approximate local taxi costs, currency conversion tips, and any other relevant factors like local customs, safety advice, or best travel tips for the specified dates.",
    "Structure the output as a JSON object with exactly two top-level keys: a 'general_info' object and a 'days' array.",
    "The 'general_info' object should contain 'currency_conversion', 'travel_insurance_tips', 'approx_taxi_costs', and 'other_tips' (e.g., local customs, safety, best time to visit).",
    "The 'days' array should contain objects, each with 'day_number' (integer), 'title' (e.g., 'Arrival in Bali & Kuta Exploration'), 'activities' (array of strings), 'accommodation' (string), and 'food' (string).",
    "Ensure all string values within the JSON are plain text, without markdown characters.",
];

/// Assemble the itinerary prompt, adding a clause only for details the
/// traveller actually supplied.
pub fn plan_prompt(trip: &TripDetails<'_>) -> PromptSpec {
    let mut clauses = vec![
        format!(
            "Create a comprehensive and engaging travel plan for a trip from {} to {}.",
            trip.origin, trip.destination
        ),
        format!(
            "The trip is planned from {} to {}.",
            trip.start_date, trip.end_date
        ),
        format!(
            "The approximate budget for the entire trip is {}.",
            trip.budget
        ),
        format!("There will be {} adult travelers.", trip.adults),
    ];

    if trip.children > 0 {
        clauses.push(format!(
            "And {} children, with ages: {}.",
            trip.children, trip.children_ages
        ));
        clauses.push("Please ensure all suggestions are kid-friendly.".to_string());
    } else {
        clauses.push("No children are included in this trip.".to_string());
    }

    if let Some(cities) = &trip.cities {
        clauses.push(format!(
            "The cities/areas to visit within the destination include: {}.",
            cities
        ));
    }

    if let Some(food) = trip.food_preference {
        clauses.push(format!("The travelers prefer food options like: {}.", food));
    }

    if let Some(hotel) = trip.hotel_preference {
        clauses.push(format!(
            "For accommodation, suggest hotels that are {}.",
            hotel
        ));
    }

    if let Some(method) = trip.travel_method {
        clauses.push(format!("The preferred method of travel is {}.", method));
        match (method.to_lowercase().as_str(), trip.flight_class, &trip.cruise_details) {
            (FLIGHT, Some(class), _) => {
                clauses.push(format!("Preferred flight class: {}.", class));
            }
            (CRUISE, _, Some(details)) => {
                clauses.push(format!("With cruise details: {}.", details));
            }
            _ => {}
        }
    }

    if !trip.additional_services.is_empty() {
        clauses.push(format!(
            "Additionally, please include information or suggestions regarding: {}.",
            trip.additional_services.join(", ")
        ));
    }

    if let Some(rate) = trip.currency_rate {
        clauses.push(format!(
            "For currency conversion tips, use this exact rate: '{}'. Do NOT add any 'as of' dates or specific dates to the currency conversion tip, just state the rate as provided.",
            rate
        ));
    }

    clauses.extend(OUTPUT_INSTRUCTIONS.iter().map(|line| line.to_string()));

    PromptSpec::for_response::<GeneratedPlan>(clauses.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TravelRequest;
    use serde_json::json;

    fn request(extra: serde_json::Value) -> TravelRequest {
        let mut body = json!({
            "origin": "Mumbai",
            "destination": "Bali",
            "start_date": "2025-07-01",
            "end_date": "2025-07-07",
            "budget": "2000 USD",
            "num_adults": 2
        });
        if let (Some(base), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(body).unwrap()
    }

    fn prompt_for(extra: serde_json::Value) -> String {
        let request = request(extra);
        let trip = request.validate().unwrap();
        plan_prompt(&trip).text
    }

    #[test]
    fn test_no_children_means_no_kid_friendly_language() {
        for children in [json!(0), json!("0"), json!(null)] {
            let text = prompt_for(json!({"num_children": children}));
            assert!(!text.contains("kid-friendly"));
            assert!(text.contains("No children are included"));
        }
    }

    #[test]
    fn test_children_always_get_kid_friendly_language() {
        let text = prompt_for(json!({"num_children": 2, "children_ages": [4, 9]}));
        assert!(text.contains("And 2 children, with ages: 4, 9."));
        assert!(text.contains("kid-friendly"));
    }

    #[test]
    fn test_optional_clauses_only_when_provided() {
        let bare = prompt_for(json!({}));
        assert!(!bare.contains("cities/areas"));
        assert!(!bare.contains("food options"));
        assert!(!bare.contains("suggest hotels that are"));
        assert!(!bare.contains("preferred method of travel"));
        assert!(!bare.contains("Additionally"));
        assert!(!bare.contains("exact rate"));

        let full = prompt_for(json!({
            "cities_to_visit": "Ubud, Kuta",
            "food_preference": "vegetarian",
            "hotel_preference": "beachfront",
            "additional_services": ["visa assistance", "travel insurance"]
        }));
        assert!(full.contains("include: Ubud, Kuta."));
        assert!(full.contains("food options like: vegetarian."));
        assert!(full.contains("hotels that are beachfront."));
        assert!(full.contains("regarding: visa assistance, travel insurance."));
    }

    #[test]
    fn test_method_specific_subclauses() {
        let flight = prompt_for(json!({"travel_method": "Flight", "flight_class": "Business"}));
        assert!(flight.contains("Preferred flight class: Business."));

        let flight_without_class = prompt_for(json!({"travel_method": "flight"}));
        assert!(!flight_without_class.contains("flight class"));

        let cruise = prompt_for(json!({
            "travel_method": "cruise",
            "flight_class": "Economy",
            "cruise_details": "Balcony cabin"
        }));
        assert!(cruise.contains("With cruise details: Balcony cabin."));
        assert!(!cruise.contains("flight class"));

        let train = prompt_for(json!({"travel_method": "train", "cruise_details": "ignored"}));
        assert!(train.contains("The preferred method of travel is train."));
        assert!(!train.contains("cruise details"));
    }

    #[test]
    fn test_currency_rate_is_quoted_verbatim_without_dates() {
        let text = prompt_for(json!({
            "current_currency_rate": "1 USD is approximately 83.123 INR."
        }));
        assert!(text.contains("use this exact rate: '1 USD is approximately 83.123 INR.'"));
        assert!(text.contains("Do NOT add any 'as of' dates"));
    }

    #[test]
    fn test_closing_instructions_and_schema() {
        let request = request(json!({}));
        let trip = request.validate().unwrap();
        let prompt = plan_prompt(&trip);

        assert!(prompt.text.ends_with("without markdown characters."));
        assert!(prompt.text.contains("'general_info'"));
        assert!(prompt.text.contains("'days'"));

        let schema = &prompt.schema;
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], json!(["days", "general_info"]));
        let day = &schema["properties"]["days"]["items"];
        assert_eq!(day["type"], "OBJECT");
        assert_eq!(day["properties"]["day_number"]["type"], "NUMBER");
        assert_eq!(day["properties"]["activities"]["items"]["type"], "STRING");
        let mut required: Vec<&str> = day["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        required.sort_unstable();
        assert_eq!(
            required,
            vec!["accommodation", "activities", "day_number", "food", "title"]
        );
    }
}
