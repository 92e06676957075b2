use std::sync::Arc;

use serde_json::Value;

use super::transport::{OutboundRequest, Transport};
use crate::{
    core::config::{AppConfig, Credential},
    error::{Result, TravelError},
    types::FlightQuery,
};

pub(crate) const PROVIDER: &str = "SerpAPI";
const ENGINE: &str = "google_flights";
const LANGUAGE: &str = "en";

/// Client for the Google Flights engine of the search aggregator.
#[derive(Clone, Debug)]
pub struct FlightSearchClient {
    api_key: Option<Credential>,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl FlightSearchClient {
    pub fn new(config: &AppConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_key: config.serpapi_api_key().cloned(),
            base_url: config.serpapi_base_url().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Fetch the raw search result for a round trip.
    pub async fn search(&self, query: &FlightQuery) -> Result<Value> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            TravelError::Config("SerpAPI key not configured on the backend.".to_string())
        })?;

        let request = OutboundRequest::get(PROVIDER, format!("{}/search.json", self.base_url))
            .with_query("engine", ENGINE)
            .with_query("departure_id", query.origin.as_str())
            .with_query("arrival_id", query.destination.as_str())
            .with_query("outbound_date", query.outbound_date.as_str())
            .with_query("return_date", query.return_date.as_str())
            .with_query("currency", query.currency.as_str())
            .with_query("hl", LANGUAGE)
            .with_query("api_key", api_key.expose());

        self.transport.call(request).await
    }
}
