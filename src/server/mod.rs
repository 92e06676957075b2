//! HTTP surface: one POST route per use case plus a health probe.

pub mod envelope;
mod error;
pub mod handlers;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::core::TravelPlanner;

pub type SharedPlanner = Arc<TravelPlanner>;

pub fn router(planner: SharedPlanner) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate_plan", post(handlers::generate_plan))
        .route("/search_flights", post(handlers::search_flights))
        .route(
            "/suggest_travel_methods",
            post(handlers::suggest_travel_methods),
        )
        .route("/get_iata_code", post(handlers::get_iata_code))
        .route(
            "/get_live_currency_rate",
            post(handlers::get_live_currency_rate),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(planner)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, planner: SharedPlanner) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "travel planner listening");
    axum::serve(listener, router(planner)).await
}
