//! Event routing
//!
//! Turns inbound events into bridge calls and formats the replies the
//! gateway sends back to the user.

use super::constants::*;
use super::event::InboundEvent;
use crate::bridge::{BridgeClient, BridgeConnection, ChatError, StatusPayload};
use crate::session::{SessionRegistry, UserId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Routes inbound events to the bridge
#[derive(Clone)]
pub struct Dispatcher {
    connection: Arc<BridgeConnection>,
    client: BridgeClient,
    sessions: Arc<SessionRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over a shared connection and session registry
    pub fn new(connection: Arc<BridgeConnection>, sessions: Arc<SessionRegistry>) -> Self {
        Self {
            client: BridgeClient::new(connection.clone()),
            connection,
            sessions,
        }
    }

    /// Handle one inbound event
    ///
    /// # Returns
    /// * `Vec<String>` - Replies to send, in order (may be empty)
    pub async fn handle(&self, event: InboundEvent) -> Vec<String> {
        debug!(user_id = event.user_id(), kind = event.kind(), "Dispatching event");

        match event {
            InboundEvent::Command {
                user_id,
                user_name,
                name,
                args,
            } => self.command(user_id, user_name.as_deref(), &name, &args).await,
            InboundEvent::Text { user_id, text } => {
                if !self.sessions.is_connected(user_id).await {
                    return vec![NOT_CONNECTED_REPLY.to_string()];
                }
                self.chat(&text).await
            }
            InboundEvent::Photo {
                user_id,
                caption,
                image_url,
            } => self.photo(user_id, caption, image_url).await,
        }
    }

    async fn command(
        &self,
        user_id: UserId,
        user_name: Option<&str>,
        name: &str,
        args: &[String],
    ) -> Vec<String> {
        match name.trim_start_matches('/') {
            "start" => self.start(user_id, user_name).await,
            "help" => vec![HELP_REPLY.to_string()],
            "connect_bridge" => self.connect_bridge(user_id, args).await,
            "bridge_status" => self.bridge_status().await,
            "chat" => {
                if !self.sessions.is_connected(user_id).await {
                    return vec![NOT_CONNECTED_REPLY.to_string()];
                }
                if args.is_empty() {
                    return vec![CHAT_USAGE_REPLY.to_string()];
                }
                self.chat(&args.join(" ")).await
            }
            other => {
                debug!(user_id, command = %other, "Ignoring unknown command");
                Vec::new()
            }
        }
    }

    async fn start(&self, user_id: UserId, user_name: Option<&str>) -> Vec<String> {
        self.sessions.mark_connected(user_id).await;

        let state = if self.connection.is_connected().await {
            "already connected"
        } else {
            "not connected"
        };
        vec![format!(
            "Hi {}! I'm the AI bridge bot.\n\n\
             I'm {} to the AI bridge.\n\n\
             You can use these commands:\n\
             /chat - Chat with AI\n\
             /vision - Analyze images (send image with caption)\n\
             /bridge_status - Check bridge connection status",
            user_name.unwrap_or("there"),
            state
        )]
    }

    async fn connect_bridge(&self, user_id: UserId, args: &[String]) -> Vec<String> {
        if args.len() < 2 {
            let snapshot = self.connection.snapshot().await;
            return vec![format!(
                "The bot is currently {} to:\n\
                 Bridge URL: {}\n\
                 Session ID: {}\n\n\
                 To change, use: /connect_bridge <url> <session_id>",
                if snapshot.connected {
                    "connected"
                } else {
                    "not connected"
                },
                snapshot.endpoint,
                snapshot.session_id
            )];
        }

        let mut replies = vec![CONNECTING_REPLY.to_string()];
        match self.connection.connect(&args[0], &args[1]).await {
            Ok(()) => {
                self.sessions.mark_connected(user_id).await;
                info!(user_id, "User reconnected the bridge");
                replies.push(CONNECTED_REPLY.to_string());
            }
            Err(e) => {
                warn!(user_id, error = %e, "User bridge reconnect failed");
                replies.push(format!("Failed to connect: {}", e));
            }
        }
        replies
    }

    async fn bridge_status(&self) -> Vec<String> {
        let snapshot = self.connection.snapshot().await;
        if !snapshot.connected {
            return vec![format!(
                "Not connected to bridge.\nURL: {}\nSession ID: {}",
                snapshot.endpoint, snapshot.session_id
            )];
        }

        match self.connection.get_status().await {
            Ok(payload) => vec![format_status(
                &snapshot.endpoint,
                &snapshot.session_id,
                &payload,
            )],
            Err(e) => vec![format!("Error checking status: {}", e)],
        }
    }

    async fn photo(
        &self,
        user_id: UserId,
        caption: Option<String>,
        image_url: Option<String>,
    ) -> Vec<String> {
        if !self.sessions.is_connected(user_id).await {
            return vec![NOT_CONNECTED_REPLY.to_string()];
        }

        let Some(image_url) = image_url.filter(|url| !url.trim().is_empty()) else {
            return vec![MISSING_IMAGE_REPLY.to_string()];
        };
        let prompt = caption
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VISION_PROMPT.to_string());

        let result = self.client.vision(&prompt, &image_url).await;
        vec![ANALYZING_REPLY.to_string(), render(result)]
    }

    async fn chat(&self, prompt: &str) -> Vec<String> {
        let result = self.client.chat(prompt, None).await;
        vec![PROCESSING_REPLY.to_string(), render(result)]
    }
}

fn render(result: Result<String, ChatError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => format!("Error: {}", e),
    }
}

/// Format a status check result for display
pub fn format_status(endpoint: &str, session_id: &str, payload: &StatusPayload) -> String {
    let mut text = format!(
        "Connected to bridge\nURL: {}\nSession ID: {}",
        endpoint, session_id
    );
    if let Some(status) = &payload.status {
        text.push_str(&format!("\nBridge status: {}", status));
    }
    if let Some(stats) = &payload.stats {
        let active = stats
            .authenticated_sessions
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        text.push_str(&format!("\nActive sessions: {}", active));
    }
    text
}
