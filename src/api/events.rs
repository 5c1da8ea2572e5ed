//! Inbound event API
//!
//! The messaging gateway posts one event per user action and relays the
//! returned replies back to the chat.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dispatcher::InboundEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Response to a dispatched event
#[derive(Serialize, Deserialize, Debug)]
pub struct EventResponse {
    /// Replies to send to the user, in order
    pub replies: Vec<String>,
}

/// Reject events that can never produce a useful reply
///
/// # Returns
/// * `Ok(())` - Event is well formed
/// * `Err(AppError)` - Blank text message or command name
pub fn validate_event(event: &InboundEvent) -> Result<(), AppError> {
    match event {
        InboundEvent::Text { text, .. } if text.trim().is_empty() => Err(
            AppError::InvalidEvent("text message cannot be empty".to_string()),
        ),
        InboundEvent::Command { name, .. } if name.trim_start_matches('/').trim().is_empty() => {
            Err(AppError::InvalidEvent(
                "command name cannot be empty".to_string(),
            ))
        }
        _ => Ok(()),
    }
}

/// Dispatch one inbound event
///
/// POST /api/events
pub async fn post_event(
    State(state): State<AppState>,
    Json(event): Json<InboundEvent>,
) -> Result<Json<EventResponse>, AppError> {
    validate_event(&event)?;

    let user_id = event.user_id();
    let kind = event.kind();
    let replies = state.dispatcher.handle(event).await;

    info!(
        user_id,
        kind,
        reply_count = replies.len(),
        "Event dispatched"
    );

    Ok(Json(EventResponse { replies }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_event() {
        assert!(validate_event(&InboundEvent::Text {
            user_id: 1,
            text: "  ".to_string()
        })
        .is_err());
        assert!(validate_event(&InboundEvent::Command {
            user_id: 1,
            user_name: None,
            name: "/".to_string(),
            args: vec![],
        })
        .is_err());
        assert!(validate_event(&InboundEvent::Photo {
            user_id: 1,
            caption: None,
            image_url: None,
        })
        .is_ok());
    }
}
