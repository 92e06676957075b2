//! Cheapest-flight selection over a Google Flights search result.

use serde_json::Value;

use super::lookup::{first_present, text_at, Lookup};
use crate::types::{FlightQuery, FlightQuote, FlightSearchOutcome, NOT_AVAILABLE};

const BEST_FLIGHTS: &str = "best_flights";
const OTHER_FLIGHTS: &str = "other_flights";
const DIRECT: &str = "Direct";

/// Airline name: the itinerary-level field first, then the first leg's carrier.
const AIRLINE_LOOKUPS: [Lookup<String>; 2] = [itinerary_airline, first_leg_airline];

fn itinerary_airline(flight: &Value) -> Option<String> {
    text_at(flight, "/airline_name")
}

fn first_leg_airline(flight: &Value) -> Option<String> {
    text_at(flight, "/flights/0/airline")
}

/// Pick the candidate to quote.
///
/// The first "best flights" entry wins outright, without comparing its price
/// to anything else. Otherwise the lowest-priced "other flights" entry is
/// used; a missing or non-numeric price counts as infinitely expensive and
/// ties keep the earliest entry.
pub fn select_cheapest(results: &Value) -> Option<&Value> {
    if let Some(best) = non_empty_list(results, BEST_FLIGHTS) {
        return best.first();
    }

    non_empty_list(results, OTHER_FLIGHTS)?
        .iter()
        .min_by(|a, b| price_key(a).total_cmp(&price_key(b)))
}

/// Select and format the cheapest flight, or report that none matched.
pub fn extract_cheapest(results: &Value, query: &FlightQuery) -> FlightSearchOutcome {
    match select_cheapest(results) {
        Some(candidate) => FlightSearchOutcome::Found(quote_from_candidate(candidate, query)),
        None => FlightSearchOutcome::NoFlights,
    }
}

/// Format a candidate, falling back to sentinels for anything missing.
pub fn quote_from_candidate(candidate: &Value, query: &FlightQuery) -> FlightQuote {
    FlightQuote {
        departure_airport: text_at(candidate, "/departure_airport/name")
            .unwrap_or_else(|| query.origin.clone()),
        arrival_airport: text_at(candidate, "/arrival_airport/name")
            .unwrap_or_else(|| query.destination.clone()),
        total_duration: format_duration(candidate.get("total_duration")),
        price: format_price(candidate, &query.currency),
        airline: first_present(candidate, &AIRLINE_LOOKUPS)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        stops: stop_description(candidate),
    }
}

/// Render a duration in minutes as `"{h}h {m}min"`.
///
/// Fractional minutes are dropped; anything non-numeric renders as `N/A`.
pub fn format_duration(minutes: Option<&Value>) -> String {
    let whole_minutes = match minutes {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|m| m.floor() as i64)),
        _ => None,
    };

    match whole_minutes {
        Some(total) => format!("{}h {}min", total.div_euclid(60), total.rem_euclid(60)),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn format_price(candidate: &Value, requested_currency: &str) -> String {
    let amount = match candidate.get("price") {
        None | Some(Value::Null) => return NOT_AVAILABLE.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };
    let currency =
        text_at(candidate, "/price_currency").unwrap_or_else(|| requested_currency.to_string());

    format!("{} {} (per person)", currency, amount)
}

fn stop_description(candidate: &Value) -> String {
    candidate
        .get("extensions")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|extension| extension.to_lowercase().contains("stop"))
        .unwrap_or(DIRECT)
        .to_string()
}

fn non_empty_list<'a>(results: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    results
        .get(key)
        .and_then(Value::as_array)
        .filter(|list| !list.is_empty())
}

fn price_key(candidate: &Value) -> f64 {
    candidate
        .get("price")
        .and_then(Value::as_f64)
        .unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query() -> FlightQuery {
        FlightQuery {
            origin: "BOM".into(),
            destination: "DPS".into(),
            outbound_date: "2025-07-01".into(),
            return_date: "2025-07-07".into(),
            currency: "INR".into(),
        }
    }

    #[test]
    fn test_single_best_flight_wins_regardless_of_price() {
        let results = json!({
            "best_flights": [{"price": 900, "airline_name": "Best Air"}],
            "other_flights": [{"price": 100, "airline_name": "Cheap Air"}]
        });
        let chosen = select_cheapest(&results).unwrap();
        assert_eq!(chosen["airline_name"], "Best Air");
    }

    #[test]
    fn test_cheapest_other_flight_when_no_best_flights() {
        let results = json!({
            "best_flights": [],
            "other_flights": [
                {"price": 500, "id": 1},
                {"id": 2},
                {"price": 320, "id": 3},
                {"price": 320, "id": 4}
            ]
        });
        assert_eq!(select_cheapest(&results).unwrap()["id"], 3);
    }

    #[test]
    fn test_all_prices_missing_still_returns_first_entry() {
        let results = json!({"other_flights": [{"id": "a"}, {"id": "b"}]});
        assert_eq!(select_cheapest(&results).unwrap()["id"], "a");
    }

    #[test]
    fn test_no_candidates_is_no_flights() {
        for results in [json!({}), json!({"best_flights": [], "other_flights": []})] {
            assert_eq!(extract_cheapest(&results, &query()), FlightSearchOutcome::NoFlights);
        }
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration(Some(&json!(125))), "2h 5min");
        assert_eq!(format_duration(Some(&json!(60))), "1h 0min");
        assert_eq!(format_duration(Some(&json!(45.7))), "0h 45min");
        assert_eq!(format_duration(Some(&json!("125"))), "N/A");
        assert_eq!(format_duration(None), "N/A");
    }

    #[test]
    fn test_full_candidate_extraction() {
        let candidate = json!({
            "departure_airport": {"name": "Chhatrapati Shivaji International Airport"},
            "arrival_airport": {"name": "Ngurah Rai International Airport"},
            "total_duration": 545,
            "price": 31250,
            "price_currency": "INR",
            "flights": [{"airline": "IndiGo"}],
            "extensions": ["Carbon emissions estimate: 512 kg", "1 stop in SIN"]
        });

        let quote = quote_from_candidate(&candidate, &query());
        assert_eq!(
            quote,
            FlightQuote {
                departure_airport: "Chhatrapati Shivaji International Airport".into(),
                arrival_airport: "Ngurah Rai International Airport".into(),
                total_duration: "9h 5min".into(),
                price: "INR 31250 (per person)".into(),
                airline: "IndiGo".into(),
                stops: "1 stop in SIN".into(),
            }
        );
    }

    #[test]
    fn test_sparse_candidate_degrades_to_sentinels() {
        let quote = quote_from_candidate(&json!({"extensions": [42, "Wi-Fi"]}), &query());
        assert_eq!(quote.departure_airport, "BOM");
        assert_eq!(quote.arrival_airport, "DPS");
        assert_eq!(quote.total_duration, "N/A");
        assert_eq!(quote.price, "N/A");
        assert_eq!(quote.airline, "N/A");
        assert_eq!(quote.stops, "Direct");
    }

    #[test]
    fn test_airline_prefers_top_level_name_and_first_stop_match() {
        let candidate = json!({
            "airline_name": "Garuda",
            "flights": [{"airline": "IndiGo"}],
            "price": 199.5,
            "extensions": ["NONSTOP service", "1 Stop"]
        });
        let quote = quote_from_candidate(&candidate, &query());
        assert_eq!(quote.airline, "Garuda");
        assert_eq!(quote.stops, "NONSTOP service");
        assert_eq!(quote.price, "INR 199.5 (per person)");
    }
}
