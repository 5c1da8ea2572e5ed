//! Bridge Connection
//!
//! Owns the connectivity state for the bridge endpoint: the base URL, the
//! shared session identifier and the connected flag. All three fields sit
//! behind one lock so readers always observe a consistent triple. The lock is
//! never held across a network round trip.

use super::error::{ConnectionError, StatusError};
use super::types::{ConnectRequest, StatusPayload};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Consistent copy of the connection fields taken under the lock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSnapshot {
    /// Base URL of the bridge service
    pub endpoint: String,
    /// Session identifier shared with the bridge
    pub session_id: String,
    /// True only after a successful handshake
    pub connected: bool,
}

#[derive(Debug, Default)]
struct ConnectionState {
    endpoint: String,
    session_id: String,
    connected: bool,
    /// Incremented each time a handshake starts
    attempt: u64,
}

/// Shared connection to the bridge service
///
/// Constructed once at startup and passed around as `Arc<BridgeConnection>`.
pub struct BridgeConnection {
    http: reqwest::Client,
    state: RwLock<ConnectionState>,
}

/// Build the shared HTTP client used for every bridge call
///
/// # Arguments
/// * `timeout` - Upper bound for a single request, connect through body
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Join the bridge base URL with an API path
pub(crate) fn api_url(endpoint: &str, path: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), path)
}

impl BridgeConnection {
    /// Create a disconnected bridge connection
    ///
    /// Endpoint and session id may be empty; they are only used once
    /// [`BridgeConnection::connect`] or [`BridgeConnection::get_status`] runs.
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            state: RwLock::new(ConnectionState {
                endpoint: endpoint.into(),
                session_id: session_id.into(),
                connected: false,
                attempt: 0,
            }),
        }
    }

    /// Connection already marked as connected, without a handshake
    #[cfg(test)]
    pub(crate) fn connected_for_test(endpoint: &str, session_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            state: RwLock::new(ConnectionState {
                endpoint: endpoint.to_string(),
                session_id: session_id.to_string(),
                connected: true,
                attempt: 0,
            }),
        }
    }

    /// Shared HTTP client (connection pooling)
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    /// Take a consistent copy of endpoint, session id and connected flag
    pub async fn snapshot(&self) -> ConnectionSnapshot {
        let state = self.state.read().await;
        ConnectionSnapshot {
            endpoint: state.endpoint.clone(),
            session_id: state.session_id.clone(),
            connected: state.connected,
        }
    }

    /// Whether the last handshake succeeded
    pub async fn is_connected(&self) -> bool {
        self.state.read().await.connected
    }

    /// Perform the connect handshake against a bridge endpoint
    ///
    /// Invalid input is rejected before any state is touched. Otherwise the
    /// attempted endpoint and session id are stored whatever the outcome, and
    /// the connected flag reflects the result of this handshake. When a newer
    /// handshake started while this one was in flight, this one's outcome is
    /// discarded and `ConnectionError::Superseded` is returned.
    ///
    /// # Arguments
    /// * `endpoint` - Absolute http(s) base URL of the bridge
    /// * `session_id` - Opaque session identifier
    ///
    /// # Returns
    /// * `Ok(())` - Bridge accepted the session (HTTP 200)
    /// * `Err(ConnectionError)` - Validation, rejection, transport failure, or
    ///   a newer handshake took over
    pub async fn connect(&self, endpoint: &str, session_id: &str) -> Result<(), ConnectionError> {
        let endpoint = validate_endpoint(endpoint)?;
        if session_id.trim().is_empty() {
            return Err(ConnectionError::InvalidInput(
                "session id cannot be empty".to_string(),
            ));
        }

        let attempt = {
            let mut state = self.state.write().await;
            state.attempt += 1;
            state.attempt
        };

        debug!(endpoint = %endpoint, attempt, "Starting bridge handshake");
        let outcome = self.handshake(&endpoint, session_id).await;

        let mut state = self.state.write().await;
        if state.attempt != attempt {
            warn!(
                endpoint = %endpoint,
                attempt,
                latest_attempt = state.attempt,
                handshake_ok = outcome.is_ok(),
                "Bridge handshake superseded by a newer attempt, discarding outcome"
            );
            return Err(ConnectionError::Superseded);
        }
        state.endpoint = endpoint;
        state.session_id = session_id.to_string();
        state.connected = outcome.is_ok();

        match &outcome {
            Ok(()) => info!(endpoint = %state.endpoint, "Connected to bridge"),
            Err(e) => warn!(endpoint = %state.endpoint, error = %e, "Bridge handshake failed"),
        }

        outcome
    }

    async fn handshake(&self, endpoint: &str, session_id: &str) -> Result<(), ConnectionError> {
        let response = self
            .http
            .post(api_url(endpoint, "/api/connect"))
            .json(&ConnectRequest { session_id })
            .send()
            .await
            .map_err(|e| ConnectionError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 200 {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        Err(ConnectionError::Rejected { status, body })
    }

    /// Query the bridge status endpoint
    ///
    /// Works whenever an endpoint is known, connected or not.
    ///
    /// # Returns
    /// * `Ok(StatusPayload)` - Parsed status body
    /// * `Err(StatusError)` - Missing endpoint, HTTP, payload or transport failure
    pub async fn get_status(&self) -> Result<StatusPayload, StatusError> {
        let endpoint = self.state.read().await.endpoint.clone();
        if endpoint.trim().is_empty() {
            return Err(StatusError::NotConfigured);
        }

        debug!(endpoint = %endpoint, "Probing bridge status");

        let response = self
            .http
            .get(api_url(&endpoint, "/api/status"))
            .send()
            .await
            .map_err(|e| StatusError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| StatusError::Transport(e.to_string()))?;

        if status != 200 {
            warn!(status_code = status, body = %body, "Bridge status check failed");
            return Err(StatusError::Http { status, body });
        }

        serde_json::from_str(&body).map_err(|e| StatusError::InvalidPayload(e.to_string()))
    }
}

fn validate_endpoint(endpoint: &str) -> Result<String, ConnectionError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(ConnectionError::InvalidInput(
            "bridge URL cannot be empty".to_string(),
        ));
    }

    let url = reqwest::Url::parse(endpoint)
        .map_err(|e| ConnectionError::InvalidInput(format!("invalid bridge URL: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConnectionError::InvalidInput(format!(
            "bridge URL must be an http(s) address: {}",
            endpoint
        )));
    }

    Ok(endpoint.trim_end_matches('/').to_string())
}
