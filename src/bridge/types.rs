//! Bridge wire types
//!
//! Structs that mirror the JSON bodies exchanged with the bridge service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/connect`
#[derive(Serialize, Debug)]
pub struct ConnectRequest<'a> {
    /// Session identifier to validate
    #[serde(rename = "sessionId")]
    pub session_id: &'a str,
}

/// Body of `POST /api/chat`
#[derive(Serialize, Debug)]
pub struct ChatRequest<'a> {
    /// User prompt
    pub prompt: &'a str,
    /// Free-form model options, forwarded untouched
    pub options: &'a Map<String, Value>,
    /// Session identifier
    #[serde(rename = "sessionId")]
    pub session_id: &'a str,
}

/// Body of `POST /api/vision`
#[derive(Serialize, Debug)]
pub struct VisionRequest<'a> {
    /// User prompt (photo caption)
    pub prompt: &'a str,
    /// URL of the image to analyze
    #[serde(rename = "imageURL")]
    pub image_url: &'a str,
    /// Session identifier
    #[serde(rename = "sessionId")]
    pub session_id: &'a str,
}

/// Parsed body of `GET /api/status`
///
/// Only `status` and `stats` are interpreted; every other field is kept in
/// `extra` so callers still see the full payload.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StatusPayload {
    /// Bridge-reported state, e.g. "online"
    #[serde(default)]
    pub status: Option<String>,
    /// Session counters
    #[serde(default)]
    pub stats: Option<BridgeStats>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Session counters reported by the bridge
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeStats {
    /// Sessions known to the bridge
    #[serde(default)]
    pub total_sessions: Option<u64>,
    /// Sessions that completed authentication
    #[serde(default)]
    pub authenticated_sessions: Option<u64>,
}
