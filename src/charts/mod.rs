//! Chart derivations
//!
//! The two pure functions the dashboard is built around. Each takes the
//! immutable launch table plus the current widget values and returns a
//! chart specification (labels/values/points/title); drawing is the
//! client's job. Both are total: unknown sites or empty ranges produce
//! empty specs, never errors.
//!
//! - [`success_pie`]: success counts for the pie chart
//! - [`payload_scatter`]: payload/outcome points for the scatter chart

pub mod pie;
pub mod scatter;

pub use pie::success_pie;
pub use scatter::payload_scatter;

use serde::Serialize;

/// Specification for the success pie chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSpec {
    /// Slice labels: site names, or outcome values for a single site
    pub labels: Vec<String>,
    /// Slice values: row counts, parallel to `labels`
    pub values: Vec<u64>,
    /// Chart title
    pub title: String,
}

/// Specification for the payload/success scatter chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterSpec {
    /// Points surviving the site and payload filters
    pub points: Vec<ScatterPoint>,
    /// Field plotted on the x axis
    pub x_field: String,
    /// Field plotted on the y axis
    pub y_field: String,
    /// Field that selects the point color
    pub color_field: String,
    /// Chart title
    pub title: String,
}

/// One point of the scatter chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    /// X value: payload mass in kg
    pub payload_mass_kg: f64,
    /// Y value: launch outcome (0 or 1)
    pub outcome: u8,
    /// Color key: booster version category
    pub booster_category: String,
}
