//! WebSocket Connection Hub
//!
//! Tracks every open recommendation channel and routes replies to it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::feed::Recommendations;

/// Unique identifier for a WebSocket connection
pub type ConnectionId = String;

/// Manages all recommendation channels
pub struct ConnectionHub {
    /// Active connections: ConnectionId → ConnectionHandle
    connections: Arc<RwLock<HashMap<ConnectionId, ConnectionHandle>>>,
    /// Configuration
    config: HubConfig,
}

/// Configuration for the connection hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent connections
    pub max_connections: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_connections: 1000,
        }
    }
}

/// Handle for sending replies to a specific connection
pub struct ConnectionHandle {
    /// Channel sender for this connection
    pub sender: mpsc::UnboundedSender<Recommendations>,
    /// When the channel was opened
    pub opened_at: Instant,
    /// Selections answered so far
    pub requests: u64,
}

impl ConnectionHub {
    /// Create a new connection hub
    pub fn new(config: HubConfig) -> Self {
        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Register a new WebSocket connection
    ///
    /// Returns the connection ID on success, or an error if the connection
    /// limit has been reached.
    pub async fn register(
        &self,
        sender: mpsc::UnboundedSender<Recommendations>,
    ) -> Result<ConnectionId, HubError> {
        let mut connections = self.connections.write().await;
        if connections.len() >= self.config.max_connections {
            return Err(HubError::TooManyConnections {
                limit: self.config.max_connections,
            });
        }

        let id = Uuid::new_v4().to_string();
        connections.insert(
            id.clone(),
            ConnectionHandle {
                sender,
                opened_at: Instant::now(),
                requests: 0,
            },
        );

        tracing::info!(connection_id = %id, "Recommendation channel opened");
        Ok(id)
    }

    /// Unregister a connection
    pub async fn unregister(&self, id: &str) {
        if let Some(handle) = self.connections.write().await.remove(id) {
            tracing::info!(
                connection_id = %id,
                requests = handle.requests,
                open_secs = handle.opened_at.elapsed().as_secs(),
                "Recommendation channel closed"
            );
        }
    }

    /// Queue a recommendation reply for a specific connection
    pub async fn send_to(&self, id: &str, reply: Recommendations) -> Result<(), HubError> {
        let mut connections = self.connections.write().await;
        let handle = connections
            .get_mut(id)
            .ok_or(HubError::ConnectionNotFound)?;

        handle.requests += 1;
        handle.sender.send(reply).map_err(|_| HubError::SendFailed)
    }

    /// Get the current connection count
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Number of selections answered on a connection
    pub async fn request_count(&self, id: &str) -> Option<u64> {
        self.connections.read().await.get(id).map(|h| h.requests)
    }
}

/// Errors that can occur in the connection hub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many connections (limit: {limit})")]
    TooManyConnections { limit: usize },

    #[error("Connection not found")]
    ConnectionNotFound,

    #[error("Failed to send message")]
    SendFailed,
}
