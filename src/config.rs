//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Bridge configuration
    pub bridge: BridgeConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Bridge configuration
#[derive(Clone)]
pub struct BridgeConfig {
    /// Base URL of the bridge service (empty when unset)
    pub endpoint: String,
    /// Shared session identifier (empty when unset)
    pub session_id: String,
    /// Timeout for a single bridge request (in seconds)
    pub timeout_secs: u64,
}

// The session id is a credential; keep it out of logs
impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("endpoint", &self.endpoint)
            .field("session_id", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl BridgeConfig {
    /// Whether both endpoint and session id are set
    pub fn is_complete(&self) -> bool {
        !self.endpoint.trim().is_empty() && !self.session_id.trim().is_empty()
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            bridge: BridgeConfig {
                endpoint: env::var("BRIDGE_URL").unwrap_or_default(),
                session_id: env::var("SESSION_ID").unwrap_or_default(),
                timeout_secs: env::var("BRIDGE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .filter(|t| *t > 0)
                    .unwrap_or(30),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_config_completeness() {
        let mut bridge = BridgeConfig {
            endpoint: "http://bridge".to_string(),
            session_id: String::new(),
            timeout_secs: 30,
        };
        assert!(!bridge.is_complete());
        bridge.session_id = "abc".to_string();
        assert!(bridge.is_complete());
    }

    #[test]
    fn test_debug_redacts_session_id() {
        let bridge = BridgeConfig {
            endpoint: "http://bridge".to_string(),
            session_id: "secret-session".to_string(),
            timeout_secs: 30,
        };
        let rendered = format!("{:?}", bridge);
        assert!(!rendered.contains("secret-session"));
        assert!(rendered.contains("http://bridge"));
    }
}
