//! Core record type and dataset constants

use serde::{Deserialize, Serialize};

/// Sentinel dropdown value meaning "no site filter".
///
/// Must never collide with a real site name; the loader rejects a CSV
/// that contains a site with this exact name.
pub const ALL_SITES: &str = "All Sites";

/// Absolute lower bound of the payload slider, in kg.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;

/// Absolute upper bound of the payload slider, in kg.
///
/// The slider domain is fixed independently of the data; only the
/// initial selected range follows the observed min/max.
pub const PAYLOAD_SLIDER_MAX: f64 = 12_000.0;

/// Payload slider step, in kg.
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// One rocket launch, as read from the source CSV
///
/// Columns beyond the four mapped here are ignored. Records are
/// immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Categorical launch location
    #[serde(rename = "Launch Site")]
    pub site: String,

    /// Payload mass carried by the launch, in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    /// Binary outcome: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub outcome: u8,

    /// Categorical booster variant
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    /// Create a record (mainly for tests and fixtures)
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: u8,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }

    /// Whether the launch succeeded
    pub fn is_success(&self) -> bool {
        self.outcome == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        let ok = LaunchRecord::new("CCAFS LC-40", 2500.0, 1, "FT");
        let failed = LaunchRecord::new("CCAFS LC-40", 500.0, 0, "v1.0");
        assert!(ok.is_success());
        assert!(!failed.is_success());
    }
}
