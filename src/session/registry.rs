//! Session Registry
//!
//! Tracks which chat users may talk to the bridge. Entries are seeded from the
//! global bridge state: once the bridge is connected every user is admitted on
//! first contact. The flag is bookkeeping, not access control.

use crate::bridge::BridgeConnection;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// External chat-platform user identifier
pub type UserId = i64;

/// Per-user connection flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEntry {
    /// Chat user this entry belongs to
    pub user_id: UserId,
    /// Whether the user's messages are forwarded
    pub connected: bool,
}

/// In-memory map of chat users to session entries
///
/// Entries are never removed; they live until the process exits.
pub struct SessionRegistry {
    connection: Arc<BridgeConnection>,
    sessions: RwLock<HashMap<UserId, SessionEntry>>,
}

impl SessionRegistry {
    /// Create an empty registry bound to the bridge connection
    pub fn new(connection: Arc<BridgeConnection>) -> Self {
        Self {
            connection,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Check whether a user's messages should be forwarded
    ///
    /// Returns `false` without touching the registry while the bridge is
    /// disconnected. Otherwise an unknown user is provisioned as connected.
    pub async fn is_connected(&self, user_id: UserId) -> bool {
        if !self.connection.is_connected().await {
            return false;
        }

        {
            let sessions = self.sessions.read().await;
            if let Some(entry) = sessions.get(&user_id) {
                return entry.connected;
            }
        }

        let mut sessions = self.sessions.write().await;
        let entry = sessions.entry(user_id).or_insert_with(|| {
            debug!(user_id, "Provisioning session for new user");
            SessionEntry {
                user_id,
                connected: true,
            }
        });
        entry.connected
    }

    /// Mark a user as connected (idempotent)
    pub async fn mark_connected(&self, user_id: UserId) {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id)
            .and_modify(|entry| entry.connected = true)
            .or_insert(SessionEntry {
                user_id,
                connected: true,
            });
    }

    /// Look up a user's entry without provisioning one
    pub async fn get(&self, user_id: UserId) -> Option<SessionEntry> {
        self.sessions.read().await.get(&user_id).copied()
    }

    /// Number of known users
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no user has interacted yet
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(connected: bool) -> SessionRegistry {
        let connection = if connected {
            BridgeConnection::connected_for_test("http://bridge", "s")
        } else {
            BridgeConnection::new(reqwest::Client::new(), "http://bridge", "s")
        };
        SessionRegistry::new(Arc::new(connection))
    }

    #[tokio::test]
    async fn test_disconnected_bridge_rejects_without_provisioning() {
        let registry = registry(false);
        assert!(!registry.is_connected(42).await);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_auto_provision_is_idempotent() {
        let registry = registry(true);
        assert!(registry.is_connected(7).await);
        assert!(registry.is_connected(7).await);
        assert_eq!(registry.len().await, 1);
        assert_eq!(
            registry.get(7).await,
            Some(SessionEntry {
                user_id: 7,
                connected: true
            })
        );
    }

    #[tokio::test]
    async fn test_mark_connected_is_idempotent() {
        let registry = registry(false);
        registry.mark_connected(1).await;
        registry.mark_connected(1).await;
        assert_eq!(registry.len().await, 1);
        assert!(registry.get(1).await.unwrap().connected);
        // Bridge state still gates forwarding
        assert!(!registry.is_connected(1).await);
    }
}
