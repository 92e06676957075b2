#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use travel_planner_rs::{
    services::OutboundRequest, AppConfig, Result, TravelPlanner, Transport,
};

/// Transport double that records every request and answers with a fixed body.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<OutboundRequest>>,
    response: Value,
}

impl RecordingTransport {
    pub fn answering(response: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response,
        })
    }

    pub fn calls(&self) -> Vec<OutboundRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn call(&self, request: OutboundRequest) -> Result<Value> {
        self.calls.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

pub fn planner_with(config: &AppConfig, transport: &Arc<RecordingTransport>) -> TravelPlanner {
    let transport: Arc<dyn Transport> = transport.clone();
    TravelPlanner::with_transport(config, transport)
}

pub fn configured() -> AppConfig {
    AppConfig::new()
        .with_gemini_api_key("gemini-test-key")
        .with_serpapi_api_key("serp-test-key")
        .with_exchange_rate_api_key("rate-test-key")
}

/// Wrap a generated document the way `generateContent` returns it.
pub fn gemini_reply(document: &Value) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": document.to_string()}]},
            "finishReason": "STOP"
        }]
    })
}

pub fn trip_body() -> Value {
    json!({
        "origin": "Mumbai",
        "destination": "Bali",
        "start_date": "2025-07-01",
        "end_date": "2025-07-03",
        "budget": "2000 USD",
        "num_adults": 2,
        "num_children": 1,
        "children_ages": [7]
    })
}

pub fn sample_plan() -> Value {
    json!({
        "general_info": {
            "currency_conversion": "1 USD is approximately 83.123 INR.",
            "travel_insurance_tips": "**Buy** cover that includes scooters.",
            "approx_taxi_costs": "IDR 100,000 for  short rides",
            "other_tips": "## Dress modestly at temples"
        },
        "days": [
            {
                "day_number": 1,
                "title": "Arrival in Bali & Kuta Exploration",
                "activities": ["- Check in", "*Sunset* at Kuta Beach"],
                "accommodation": "Kuta Beach Hotel",
                "food": "Nasi goreng at Warung Made"
            },
            {
                "day_number": 2,
                "title": "Ubud",
                "activities": ["Monkey Forest", "Rice terraces"],
                "accommodation": "Ubud Village Resort",
                "food": "Babi guling"
            }
        ]
    })
}
