//! Bridge Client
//!
//! Issues chat and vision requests against the connected bridge and turns the
//! bridge's loosely shaped answers into plain text.

use super::connection::{api_url, BridgeConnection, ConnectionSnapshot};
use super::error::ChatError;
use super::response::{extract_text, interpret_response};
use super::types::{ChatRequest, VisionRequest};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error};

/// Chat and vision requests over a shared [`BridgeConnection`]
///
/// Cheap to clone; every clone reads the same connection state.
#[derive(Clone)]
pub struct BridgeClient {
    connection: Arc<BridgeConnection>,
}

impl BridgeClient {
    /// Create a client bound to a connection
    pub fn new(connection: Arc<BridgeConnection>) -> Self {
        Self { connection }
    }

    /// Connection this client reads its endpoint and session from
    pub fn connection(&self) -> &Arc<BridgeConnection> {
        &self.connection
    }

    /// Send a chat prompt through the bridge
    ///
    /// # Arguments
    /// * `prompt` - User prompt
    /// * `options` - Model options forwarded untouched (`None` sends `{}`)
    ///
    /// # Returns
    /// * `Ok(String)` - Normalized response text
    /// * `Err(ChatError)` - Not connected, HTTP, API or transport failure
    pub async fn chat(
        &self,
        prompt: &str,
        options: Option<&Map<String, Value>>,
    ) -> Result<String, ChatError> {
        let session = self.connected_session().await?;
        let empty = Map::new();
        let body = ChatRequest {
            prompt,
            options: options.unwrap_or(&empty),
            session_id: &session.session_id,
        };
        self.post(&session.endpoint, "/api/chat", &body).await
    }

    /// Send an image analysis request through the bridge
    ///
    /// # Arguments
    /// * `prompt` - Question about the image
    /// * `image_url` - Publicly reachable image URL
    ///
    /// # Returns
    /// * `Ok(String)` - Normalized response text
    /// * `Err(ChatError)` - Not connected, HTTP, API or transport failure
    pub async fn vision(&self, prompt: &str, image_url: &str) -> Result<String, ChatError> {
        let session = self.connected_session().await?;
        let body = VisionRequest {
            prompt,
            image_url,
            session_id: &session.session_id,
        };
        self.post(&session.endpoint, "/api/vision", &body).await
    }

    async fn connected_session(&self) -> Result<ConnectionSnapshot, ChatError> {
        let snapshot = self.connection.snapshot().await;
        if !snapshot.connected {
            debug!("Bridge request skipped: not connected");
            return Err(ChatError::NotConnected);
        }
        Ok(snapshot)
    }

    async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        path: &str,
        body: &B,
    ) -> Result<String, ChatError> {
        let url = api_url(endpoint, path);
        debug!(url = %url, "Sending bridge request");

        let response = self
            .connection
            .http_client()
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Bridge request failed");
                ChatError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to read bridge response body");
            ChatError::Transport(e.to_string())
        })?;

        let payload = interpret_response(status, &text).map_err(|e| {
            error!(url = %url, status_code = status, error = %e, "Bridge returned an error");
            e
        })?;

        let reply = extract_text(&payload);
        debug!(url = %url, response_len = reply.len(), "Bridge request succeeded");
        Ok(reply)
    }
}
