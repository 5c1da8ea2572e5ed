//! Shared application state
//!
//! Built once at startup and cloned into every request handler.

use crate::bridge::{build_http_client, BridgeConnection};
use crate::config::BridgeConfig;
use crate::dispatcher::Dispatcher;
use crate::session::SessionRegistry;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// State handed to axum handlers
#[derive(Clone)]
pub struct AppState {
    /// Process-wide bridge connection
    pub connection: Arc<BridgeConnection>,
    /// Per-user session flags
    pub sessions: Arc<SessionRegistry>,
    /// Event router
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Wire registry and dispatcher around an existing connection
    pub fn new(connection: Arc<BridgeConnection>) -> Self {
        let sessions = Arc::new(SessionRegistry::new(connection.clone()));
        let dispatcher = Dispatcher::new(connection.clone(), sessions.clone());
        Self {
            connection,
            sessions,
            dispatcher,
        }
    }

    /// Build state from bridge configuration (disconnected)
    pub fn from_config(config: &BridgeConfig) -> Result<Self, reqwest::Error> {
        let http = build_http_client(Duration::from_secs(config.timeout_secs))?;
        let connection = BridgeConnection::new(
            http,
            config.endpoint.clone(),
            config.session_id.clone(),
        );
        Ok(Self::new(Arc::new(connection)))
    }

    /// Handshake with the configured bridge when endpoint and session id are set
    ///
    /// A failed handshake is only logged; `/connect_bridge` can retry later.
    pub async fn auto_connect(&self, config: &BridgeConfig) {
        if !config.is_complete() {
            info!("Bridge URL or session id not set, skipping auto-connect");
            return;
        }

        match self
            .connection
            .connect(&config.endpoint, &config.session_id)
            .await
        {
            Ok(()) => info!(endpoint = %config.endpoint, "Auto-connected to bridge"),
            Err(e) => warn!(endpoint = %config.endpoint, error = %e, "Auto-connect to bridge failed"),
        }
    }
}
