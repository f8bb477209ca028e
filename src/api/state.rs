//! Application State
//!
//! Shared state accessible by all API handlers. The launch table is
//! read-only after load, so handlers share it behind an `Arc` without
//! any locking.

use std::sync::Arc;
use std::time::Instant;

use crate::data::LaunchTable;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable launch table loaded at startup
    pub table: Arc<LaunchTable>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around a loaded table
    pub fn new(table: Arc<LaunchTable>, config: ApiConfig) -> Self {
        Self {
            table,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
