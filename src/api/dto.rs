//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.
//!
//! The chart responses themselves are the [`crate::charts`] specs,
//! which already derive `Serialize`.

use serde::{Deserialize, Serialize};

// ============================================
// WIDGET DTOs
// ============================================

/// Dropdown options response
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    /// Option list: the all-sites sentinel followed by each distinct
    /// site in first-appearance order
    pub options: Vec<String>,
    /// Default selection for a fresh page load
    pub selected: String,
}

/// Payload slider response
///
/// The absolute domain is fixed (0-12000, step 1000) while the initial
/// selected range follows the observed data bounds.
#[derive(Debug, Serialize)]
pub struct PayloadRangeResponse {
    /// Absolute slider minimum (kg)
    pub min: f64,
    /// Absolute slider maximum (kg)
    pub max: f64,
    /// Slider step (kg)
    pub step: f64,
    /// Initial selected range: observed data min/max
    pub selected: [f64; 2],
}

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the pie chart endpoint
#[derive(Debug, Deserialize)]
pub struct PieParams {
    /// Selected site; defaults to the all-sites sentinel
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the scatter chart endpoint
///
/// Bounds arrive as strings so a non-numeric value can be turned into
/// a proper validation error instead of a bare rejection.
#[derive(Debug, Deserialize)]
pub struct ScatterParams {
    /// Selected site; defaults to the all-sites sentinel
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound (kg); defaults to the slider minimum
    #[serde(default)]
    pub low: Option<String>,
    /// Upper payload bound (kg); defaults to the slider maximum
    #[serde(default)]
    pub high: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
