//! Chat Bridge Relay Library
//!
//! Relays chat messages from a messaging gateway to a remote AI bridge and
//! returns the bridge's answers as plain text.
//! The server binary is in `src/main.rs`.

pub mod api;
pub mod bridge;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod session;
/// Shared application state
pub mod state;
