//! Session module
//!
//! Per-user session bookkeeping layered on the bridge connection.

pub mod registry;

pub use registry::{SessionEntry, SessionRegistry, UserId};
