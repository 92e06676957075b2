use std::sync::Arc;

use serde_json::Value;

use super::transport::{OutboundRequest, Transport};
use crate::{
    core::config::{AppConfig, Credential},
    error::{Result, TravelError},
};

pub(crate) const PROVIDER: &str = "ExchangeRate-API";

/// Client for the `latest` rates endpoint.
#[derive(Clone, Debug)]
pub struct ExchangeRateClient {
    api_key: Option<Credential>,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ExchangeRateClient {
    pub fn new(config: &AppConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_key: config.exchange_rate_api_key().cloned(),
            base_url: config
                .exchange_rate_base_url()
                .trim_end_matches('/')
                .to_string(),
            transport,
        }
    }

    /// Fetch every rate quoted against `base_code` (already upper-cased).
    pub async fn latest(&self, base_code: &str) -> Result<Value> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            TravelError::Config("ExchangeRate-API key not configured on the backend.".to_string())
        })?;

        let url = format!(
            "{}/v6/{}/latest/{}",
            self.base_url,
            api_key.expose(),
            base_code
        );
        self.transport.call(OutboundRequest::get(PROVIDER, url)).await
    }
}
