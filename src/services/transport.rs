use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{Result, TravelError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A single call to an external provider.
#[derive(Clone, Debug)]
pub struct OutboundRequest {
    pub provider: &'static str,
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl OutboundRequest {
    pub fn get(provider: &'static str, url: impl Into<String>) -> Self {
        Self {
            provider,
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(provider: &'static str, url: impl Into<String>, body: Value) -> Self {
        Self {
            body: Some(body),
            method: HttpMethod::Post,
            ..Self::get(provider, url)
        }
    }

    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn with_query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }
}

/// Sends provider requests and returns the decoded JSON body.
///
/// Implementations report network failures as [`TravelError::Transport`] and
/// non-2xx statuses as [`TravelError::ProviderStatus`]. Nothing is retried.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn call(&self, request: OutboundRequest) -> Result<Value>;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TravelError::Unknown(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, request: OutboundRequest) -> Result<Value> {
        let OutboundRequest {
            provider,
            method,
            url,
            headers,
            query,
            body,
        } = request;

        // The URL may embed a key, so only the provider is logged.
        debug!(provider, ?method, "dispatching provider request");

        let mut builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(*name, value);
        }
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TravelError::Transport(format!("{provider} request failed: {err}")))?;

        let status = response.status();
        let response_text = response.text().await.map_err(|err| {
            TravelError::Transport(format!("Failed to read {provider} response: {err}"))
        })?;

        if !status.is_success() {
            return Err(TravelError::ProviderStatus {
                provider,
                status: status.as_u16(),
                message: provider_error_message(&response_text),
            });
        }

        serde_json::from_str(&response_text).map_err(|err| {
            error!(provider, error = %err, raw = %response_text, "provider body is not JSON");
            TravelError::MalformedProviderJson {
                provider,
                message: err.to_string(),
                raw: Value::String(response_text),
            }
        })
    }
}

/// Prefer the provider's own `error.message`, fall back to the raw body.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
