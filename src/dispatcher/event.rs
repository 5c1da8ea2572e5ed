//! Inbound events
//!
//! Events forwarded by the messaging gateway, one per user action.

use crate::session::UserId;
use serde::{Deserialize, Serialize};

/// A single inbound user event
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    /// Slash command, e.g. `/chat hello` → name `chat`, args `["hello"]`
    Command {
        /// Sender
        user_id: UserId,
        /// Display name used in greetings
        #[serde(default)]
        user_name: Option<String>,
        /// Command name without the leading slash
        name: String,
        /// Whitespace-separated arguments
        #[serde(default)]
        args: Vec<String>,
    },
    /// Plain text message
    Text {
        /// Sender
        user_id: UserId,
        /// Message text
        text: String,
    },
    /// Photo message
    Photo {
        /// Sender
        user_id: UserId,
        /// Optional caption, used as the vision prompt
        #[serde(default)]
        caption: Option<String>,
        /// Download URL resolved by the gateway
        #[serde(default)]
        image_url: Option<String>,
    },
}

impl InboundEvent {
    /// Sender of the event
    pub fn user_id(&self) -> UserId {
        match self {
            InboundEvent::Command { user_id, .. }
            | InboundEvent::Text { user_id, .. }
            | InboundEvent::Photo { user_id, .. } => *user_id,
        }
    }

    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Command { .. } => "command",
            InboundEvent::Text { .. } => "text",
            InboundEvent::Photo { .. } => "photo",
        }
    }
}
