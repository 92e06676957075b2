//! travel-planner-rs: a small HTTP proxy that turns travel questions into
//! structured answers from an LLM, a flight-search aggregator and a
//! currency-rate service.
//!
//! Each use case runs the same pipeline: validate the request, build a
//! prompt (or pass parameters through), call the provider, extract the
//! useful part of its response, and normalize it into a fixed JSON contract.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use travel_planner_rs::{AppConfig, TravelPlanner, TravelRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let planner = TravelPlanner::new(&config)?;
//!
//!     let request: TravelRequest = serde_json::from_value(serde_json::json!({
//!         "origin": "Mumbai",
//!         "destination": "Bali",
//!         "start_date": "2025-07-01",
//!         "end_date": "2025-07-07",
//!         "budget": "2000 USD",
//!         "num_adults": 2
//!     }))?;
//!
//!     let plan = planner.generate_plan(&request).await?;
//!     println!("{} days planned", plan.value.days.len());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod extract;
pub mod prompts;
pub mod sanitize;
pub mod schemas;
pub mod server;
pub mod services;
pub mod types;

pub use crate::core::{AppConfig, Credential, Normalized, TravelPlanner};
pub use error::{Result, TravelError};
pub use sanitize::clean;
pub use schemas::{ResponseSchema, SchemaHandle};
pub use services::{HttpTransport, OutboundRequest, Transport};
pub use types::{
    CurrencyRate, CurrencyRateRequest, FlightQuote, FlightSearchOutcome, FlightSearchRequest,
    GeneratedPlan, IataLookupRequest, MethodSuggestionRequest, TravelRequest,
};

#[cfg(feature = "cli")]
pub mod cli;
