//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dashboard::{DashboardController, SliderBounds};
use crate::data::LaunchTable;
use crate::websocket::{ConnectionHub, HubConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch table, loaded once at startup
    pub table: Arc<LaunchTable>,
    /// Reactive controller binding inputs to charts
    pub controller: Arc<DashboardController>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// WebSocket connection hub for dashboard sessions
    pub ws_hub: Arc<ConnectionHub>,
}

impl AppState {
    /// Create a new AppState over a loaded table
    pub fn new(table: Arc<LaunchTable>, slider: SliderBounds, config: ServerConfig) -> Self {
        let hub_config = HubConfig {
            max_connections: config.max_connections,
        };

        Self {
            controller: Arc::new(DashboardController::new(Arc::clone(&table), slider)),
            table,
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
