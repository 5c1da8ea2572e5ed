//! API module
//!
//! HTTP surface consumed by the messaging gateway.

pub mod events;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check body
#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    /// Always "healthy" while the server answers
    pub status: String,
    /// Crate version
    pub version: String,
    /// Whether the last bridge handshake succeeded
    pub bridge_connected: bool,
}

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bridge_connected: state.connection.is_connected().await,
    })
}

/// Build the API router (without middleware)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/events", post(events::post_event))
        .with_state(state)
}
