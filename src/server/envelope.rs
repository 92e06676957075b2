//! Success bodies returned by the HTTP endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::types::FlightQuote;

pub(crate) const SUCCESS: &str = "success";
pub(crate) const NO_FLIGHTS: &str = "no_flights";
pub(crate) const NO_FLIGHTS_MESSAGE: &str =
    "Could not find flight information for the given criteria.";

/// `plan` is the cleaned model document, not a re-serialized struct.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: Value,
}

#[derive(Debug, Serialize)]
pub struct FlightFoundResponse {
    pub status: &'static str,
    pub flight: FlightQuote,
}

#[derive(Debug, Serialize)]
pub struct NoFlightsResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MethodsResponse {
    pub status: &'static str,
    pub suggested_methods: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct IataResponse {
    pub status: &'static str,
    pub iata_code: String,
}

#[derive(Debug, Serialize)]
pub struct RateResponse {
    pub status: &'static str,
    pub rate_message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
