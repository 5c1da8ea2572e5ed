//! Dispatcher module
//!
//! Thin routing layer between the messaging gateway and the bridge.

pub mod constants;
pub mod event;
pub mod router;

pub use event::InboundEvent;
pub use router::Dispatcher;
