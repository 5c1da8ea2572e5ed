//! Bridge-specific error types
//!
//! One error family per bridge operation: the connect handshake, the status
//! check, and chat/vision requests.

use thiserror::Error;

/// Errors that can occur during the connect handshake
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// Endpoint or session id failed validation; stored state was not touched
    #[error("Invalid connection parameters: {0}")]
    InvalidInput(String),

    /// Bridge answered the handshake with a non-200 status
    #[error("Bridge rejected the session (HTTP {status}): {body}")]
    Rejected {
        /// HTTP status code returned by the bridge
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Network-level failure (DNS, refused, timeout)
    #[error("Connection error: {0}")]
    Transport(String),

    /// A newer handshake started before this one finished; its outcome was discarded
    #[error("Handshake superseded by a newer connection attempt")]
    Superseded,
}

/// Errors that can occur while querying bridge status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// No bridge endpoint has been configured yet
    #[error("Bridge URL not configured")]
    NotConfigured,

    /// Bridge answered with a non-200 status
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code returned by the bridge
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Bridge answered 200 but the body was not JSON
    #[error("Invalid status payload: {0}")]
    InvalidPayload(String),

    /// Network-level failure (DNS, refused, timeout)
    #[error("Status error: {0}")]
    Transport(String),
}

/// Errors that can occur during chat and vision requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Request attempted before a successful connect handshake
    #[error("Not connected to bridge")]
    NotConnected,

    /// Bridge answered with a non-200 status
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code returned by the bridge
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Bridge reported a logical error inside a 200 response
    #[error("API error: {message}")]
    Api {
        /// Error reported by the bridge
        message: String,
    },

    /// Network-level failure (DNS, refused, timeout)
    #[error("Transport error: {0}")]
    Transport(String),
}
