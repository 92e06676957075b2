use std::sync::Arc;

use tracing::{error, info, warn};

use super::{
    config::AppConfig,
    normalize::{normalize_document, normalize_response, Normalized},
};
use crate::{
    error::Result,
    extract::{extract_cheapest, extract_rate},
    prompts::{iata_lookup_prompt, method_suggestion_prompt, plan_prompt},
    services::{ExchangeRateClient, FlightSearchClient, GeminiClient, HttpTransport, Transport},
    types::{
        CurrencyRate, CurrencyRateRequest, FlightSearchOutcome, FlightSearchRequest,
        GeneratedPlan, IataAnswer, IataLookupRequest, MethodSuggestion, MethodSuggestionRequest,
        TravelRequest,
    },
};

/// Runs each use case end to end: validate, dispatch, extract, normalize.
///
/// Holds no per-request state, so one instance is shared by every handler.
/// Input is always validated before the credential check, and the credential
/// check happens before anything is sent.
#[derive(Clone, Debug)]
pub struct TravelPlanner {
    gemini: GeminiClient,
    flights: FlightSearchClient,
    rates: ExchangeRateClient,
}

impl TravelPlanner {
    /// Planner backed by a real HTTP transport using the configured timeout.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: &AppConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            gemini: GeminiClient::new(config, Arc::clone(&transport)),
            flights: FlightSearchClient::new(config, Arc::clone(&transport)),
            rates: ExchangeRateClient::new(config, transport),
        }
    }

    /// Generate an itinerary. The typed plan is the contract check; the
    /// cleaned document is what clients receive.
    pub async fn generate_plan(
        &self,
        request: &TravelRequest,
    ) -> Result<Normalized<GeneratedPlan>> {
        let trip = request.validate()?;
        info!(
            origin = trip.origin,
            destination = trip.destination,
            children = trip.children,
            "generating travel plan"
        );

        let prompt = plan_prompt(&trip);
        let outcome = async {
            let parsed = self.gemini.generate_json(&prompt).await?;
            normalize_document::<GeneratedPlan>(parsed)
        }
        .await;

        match &outcome {
            Ok(plan) => info!(days = plan.value.days.len(), "travel plan generated"),
            Err(err) => error!(code = err.error_code(), error = %err, "travel plan generation failed"),
        }
        outcome
    }

    pub async fn suggest_travel_methods(
        &self,
        request: &MethodSuggestionRequest,
    ) -> Result<Vec<String>> {
        let (origin, destination) = request.validate()?;
        info!(origin, destination, "suggesting travel methods");

        let prompt = method_suggestion_prompt(origin, destination);
        let parsed = self.gemini.generate_json(&prompt).await.map_err(|err| {
            error!(code = err.error_code(), error = %err, "travel method suggestion failed");
            err
        })?;
        let suggestion: MethodSuggestion = normalize_response(parsed)?;

        if suggestion.methods.is_empty() {
            warn!(origin, destination, "provider suggested no travel methods");
        }
        Ok(suggestion.methods)
    }

    pub async fn lookup_iata_code(&self, request: &IataLookupRequest) -> Result<String> {
        let city = request.validate()?;
        info!(city, "looking up IATA code");

        let parsed = self
            .gemini
            .generate_json(&iata_lookup_prompt(city))
            .await
            .map_err(|err| {
                error!(code = err.error_code(), error = %err, "IATA lookup failed");
                err
            })?;
        let answer: IataAnswer = normalize_response(parsed)?;
        Ok(answer.code())
    }

    pub async fn search_flights(
        &self,
        request: &FlightSearchRequest,
    ) -> Result<FlightSearchOutcome> {
        let query = request.validate()?;
        info!(
            origin = %query.origin,
            destination = %query.destination,
            outbound_date = %query.outbound_date,
            "searching flights"
        );

        let raw = self.flights.search(&query).await.map_err(|err| {
            error!(code = err.error_code(), error = %err, "flight search failed");
            err
        })?;

        let outcome = extract_cheapest(&raw, &query);
        if outcome == FlightSearchOutcome::NoFlights {
            info!(origin = %query.origin, destination = %query.destination, "no flights matched");
        }
        Ok(outcome)
    }

    pub async fn live_currency_rate(&self, request: &CurrencyRateRequest) -> Result<CurrencyRate> {
        let pair = request.validate()?;
        info!(from = %pair.from, to = %pair.to, "fetching live currency rate");

        let raw = self.rates.latest(&pair.from).await?;
        extract_rate(&raw, &pair).map_err(|err| {
            error!(error = %err, "currency rate lookup failed");
            err
        })
    }
}
