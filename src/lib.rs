//! # Launchboard
//!
//! Launch records dashboard - loads a CSV of rocket launches into an
//! immutable in-memory table and serves an interactive dashboard: a
//! site dropdown, a payload range slider, a success pie chart, and a
//! payload/success scatter chart.
//!
//! The two chart derivations are pure functions over the loaded table,
//! kept apart from the HTTP layer so they can be tested without a
//! running server. The served page draws the charts client-side; the
//! Rust side only computes chart specifications.
//!
//! ## Modules
//!
//! - [`data`]: CSV loading and the immutable launch table
//! - [`charts`]: the pie and scatter derivation functions
//! - [`api`]: HTTP server with Axum (page, widget and chart endpoints)
//! - [`config`]: TOML config with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::api::{serve, ApiConfig, AppState};
//! use launchboard::data::load_csv;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = Arc::new(load_csv(Path::new("spacex_launch_dash.csv"))?);
//!
//!     let config = ApiConfig::default();
//!     let state = AppState::new(table, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod data;

// Re-export top-level types for convenience
pub use data::{
    load_csv, load_csv_str, DataError, DataResult, LaunchRecord, LaunchTable, ALL_SITES,
    PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};

pub use charts::{payload_scatter, success_pie, PieSpec, ScatterPoint, ScatterSpec};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
