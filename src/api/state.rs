//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::catalog::Catalog;
use crate::config::ServerConfig;
use crate::websocket::{ConnectionHub, HubConfig};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Products and their recommendations
    pub catalog: Arc<Catalog>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// WebSocket connection hub for recommendation channels
    pub ws_hub: Arc<ConnectionHub>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(catalog: Catalog, config: ServerConfig) -> Self {
        let hub_config = HubConfig {
            max_connections: config.max_connections,
        };

        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            start_time: Instant::now(),
            ws_hub: Arc::new(ConnectionHub::new(hub_config)),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get WebSocket connection count
    pub async fn ws_connection_count(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}
