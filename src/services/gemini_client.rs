use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use super::transport::{OutboundRequest, Transport};
use crate::{
    core::config::{AppConfig, Credential},
    error::{Result, TravelError},
    extract::extract_generated_json,
    prompts::PromptSpec,
};

pub(crate) const PROVIDER: &str = "Gemini";
const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

/// Client for the `generateContent` endpoint of the LLM provider.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: Option<Credential>,
    base_url: String,
    model: String,
    transport: Arc<dyn Transport>,
}

impl GeminiClient {
    pub fn new(config: &AppConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_key: config.gemini_api_key().cloned(),
            base_url: config.gemini_base_url().to_string(),
            model: config.gemini_model().to_string(),
            transport,
        }
    }

    /// Run a prompt and return the JSON document the model generated.
    pub async fn generate_json(&self, prompt: &PromptSpec) -> Result<Value> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            TravelError::Config("Gemini API key not configured on the backend.".to_string())
        })?;

        let body = GenerateContentRequest::new(&prompt.text)
            .with_response_schema(prompt.schema.clone())
            .into_value();
        debug!(model = %self.model, prompt_chars = prompt.text.len(), "requesting generation");

        let request = OutboundRequest::post(
            PROVIDER,
            build_generate_url(&self.base_url, &self.model),
            body,
        )
        .with_header(API_KEY_HEADER, api_key.expose());

        let raw = self.transport.call(request).await?;
        extract_generated_json(PROVIDER, raw)
    }
}

fn build_generate_url(base_url: &str, model: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    format!("{}/v1beta/models/{}:generateContent", trimmed, model)
}

/// Single-turn `generateContent` body with a JSON response constraint.
#[derive(Clone, Debug)]
pub struct GenerateContentRequest {
    text: String,
    response_schema: Option<Value>,
}

impl GenerateContentRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            response_schema: None,
        }
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "contents": [
                {"role": "user", "parts": [{"text": self.text}]}
            ],
            "generationConfig": {
                "responseMimeType": JSON_MIME_TYPE
            }
        });

        if let Some(schema) = self.response_schema {
            body["generationConfig"]["responseSchema"] = schema;
        }

        body
    }
}
