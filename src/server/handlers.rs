use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{envelope::*, SharedPlanner};
use crate::{
    error::{Result, TravelError},
    types::{
        decode_request, CurrencyRateRequest, FlightSearchOutcome, FlightSearchRequest,
        IataLookupRequest, MethodSuggestionRequest, TravelRequest,
    },
};

type JsonBody = std::result::Result<Json<Value>, JsonRejection>;

/// Decode a JSON body, treating an unreadable one as a client error.
fn read_body<T: DeserializeOwned>(body: JsonBody) -> Result<T> {
    let Json(value) =
        body.map_err(|rejection| TravelError::InvalidRequest(rejection.body_text()))?;
    decode_request(value)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn generate_plan(
    State(planner): State<SharedPlanner>,
    body: JsonBody,
) -> Result<Json<PlanResponse>> {
    let request: TravelRequest = read_body(body)?;
    let generated = planner.generate_plan(&request).await?;
    Ok(Json(PlanResponse {
        plan: generated.document,
    }))
}

pub async fn search_flights(
    State(planner): State<SharedPlanner>,
    body: JsonBody,
) -> Result<Response> {
    let request: FlightSearchRequest = read_body(body)?;

    let response = match planner.search_flights(&request).await? {
        FlightSearchOutcome::Found(flight) => Json(FlightFoundResponse {
            status: SUCCESS,
            flight,
        })
        .into_response(),
        FlightSearchOutcome::NoFlights => (
            StatusCode::NOT_FOUND,
            Json(NoFlightsResponse {
                status: NO_FLIGHTS,
                message: NO_FLIGHTS_MESSAGE,
            }),
        )
            .into_response(),
    };
    Ok(response)
}

pub async fn suggest_travel_methods(
    State(planner): State<SharedPlanner>,
    body: JsonBody,
) -> Result<Json<MethodsResponse>> {
    let request: MethodSuggestionRequest = read_body(body)?;
    let suggested_methods = planner.suggest_travel_methods(&request).await?;
    Ok(Json(MethodsResponse {
        status: SUCCESS,
        suggested_methods,
    }))
}

pub async fn get_iata_code(
    State(planner): State<SharedPlanner>,
    body: JsonBody,
) -> Result<Json<IataResponse>> {
    let request: IataLookupRequest = read_body(body)?;
    let iata_code = planner.lookup_iata_code(&request).await?;
    Ok(Json(IataResponse {
        status: SUCCESS,
        iata_code,
    }))
}

pub async fn get_live_currency_rate(
    State(planner): State<SharedPlanner>,
    body: JsonBody,
) -> Result<Json<RateResponse>> {
    let request: CurrencyRateRequest = read_body(body)?;
    let rate = planner.live_currency_rate(&request).await?;
    Ok(Json(RateResponse {
        status: SUCCESS,
        rate_message: rate.message(),
    }))
}
