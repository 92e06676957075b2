//! Defensive extraction from heterogeneous provider payloads.

pub mod candidates;
pub mod flights;
pub mod lookup;
pub mod rates;

pub use candidates::extract_generated_json;
pub use flights::{extract_cheapest, format_duration, quote_from_candidate, select_cheapest};
pub use lookup::{first_present, Lookup};
pub use rates::extract_rate;
