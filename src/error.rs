//! Error types for the HTTP layer
//!
//! Bridge failures never reach this layer as errors: the dispatcher turns them
//! into reply text. `AppError` covers malformed inbound requests and converts
//! into a JSON HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Inbound event failed validation
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidEvent(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
