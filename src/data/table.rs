//! In-memory launch table
//!
//! Owns the loaded records and exposes the derived constants the
//! dashboard widgets are built from: the distinct site list and the
//! observed payload bounds.

use crate::data::error::{DataError, DataResult};
use crate::data::record::{LaunchRecord, ALL_SITES};

/// Immutable table of launch records
///
/// Built once at startup, shared read-only across request handlers.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
}

impl LaunchTable {
    /// Build a table from records, enforcing the sentinel invariant
    pub fn from_records(records: Vec<LaunchRecord>) -> DataResult<Self> {
        if records.iter().any(|r| r.site == ALL_SITES) {
            return Err(DataError::ReservedSiteName(ALL_SITES.to_string()));
        }
        Ok(Self { records })
    }

    /// All records, in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct site names, in first-appearance order
    pub fn sites(&self) -> Vec<String> {
        let mut sites: Vec<String> = Vec::new();
        for record in &self.records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }
        sites
    }

    /// Minimum and maximum observed payload mass
    ///
    /// Used only as the slider's initial selected range. Returns
    /// (0.0, 0.0) for an empty table.
    pub fn payload_bounds(&self) -> (f64, f64) {
        if self.records.is_empty() {
            return (0.0, 0.0);
        }
        let min = self
            .records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}
