pub mod answers;
pub mod fields;
pub mod plan;
pub mod quotes;
pub mod request;
pub mod response;

pub use answers::{IataAnswer, MethodSuggestion};
pub use plan::{DayPlan, GeneralInfo, GeneratedPlan};
pub use quotes::{CurrencyRate, FlightQuote, FlightSearchOutcome};
pub use request::{
    CurrencyPair, CurrencyRateRequest, FlightQuery, FlightSearchRequest, IataLookupRequest,
    MethodSuggestionRequest, TravelRequest, TripDetails,
};
pub use response::{decode_request, deserialize_structured_response};

/// Sentinel for values a provider could not supply.
pub const NOT_AVAILABLE: &str = "N/A";
