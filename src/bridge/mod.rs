//! Bridge module
//!
//! HTTP plumbing for the remote AI bridge: the shared connection state, the
//! chat/vision client, wire types and response normalization.

pub mod client;
pub mod connection;
pub mod error;
pub mod response;
pub mod types;

pub use client::BridgeClient;
pub use connection::{build_http_client, BridgeConnection, ConnectionSnapshot};
pub use error::{ChatError, ConnectionError, StatusError};
pub use types::{BridgeStats, StatusPayload};
