//! Pie chart aggregation
//!
//! All sites: successful launches counted per site. Single site: that
//! site's launches counted per outcome. Group keys are emitted in
//! ascending order, which keeps the spec deterministic for a given
//! table.

use std::collections::BTreeMap;

use crate::charts::PieSpec;
use crate::data::{LaunchTable, ALL_SITES};

/// Aggregate the table into a pie chart spec for the selected site
///
/// An unknown site yields zero slices rather than an error.
pub fn success_pie(table: &LaunchTable, selected_site: &str) -> PieSpec {
    if selected_site == ALL_SITES {
        successes_by_site(table)
    } else {
        outcomes_for_site(table, selected_site)
    }
}

/// Count of successful launches per site, across the whole table
fn successes_by_site(table: &LaunchTable) -> PieSpec {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in table.records().iter().filter(|r| r.is_success()) {
        *counts.entry(record.site.as_str()).or_insert(0) += 1;
    }

    PieSpec {
        labels: counts.keys().map(|s| s.to_string()).collect(),
        values: counts.values().copied().collect(),
        title: "Total Successful launches by Site".to_string(),
    }
}

/// Count of launches per outcome, restricted to one site
fn outcomes_for_site(table: &LaunchTable, site: &str) -> PieSpec {
    let mut counts: BTreeMap<u8, u64> = BTreeMap::new();
    for record in table.records().iter().filter(|r| r.site == site) {
        *counts.entry(record.outcome).or_insert(0) += 1;
    }

    PieSpec {
        labels: counts.keys().map(|c| c.to_string()).collect(),
        values: counts.values().copied().collect(),
        title: format!("Total Successful launches for {}", site),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LaunchRecord;

    /// Sites {A, B}: 3 rows at A (outcomes 1,1,0), 2 at B (outcomes 0,1)
    fn sample() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("A", 1000.0, 1, "FT"),
            LaunchRecord::new("A", 2000.0, 1, "FT"),
            LaunchRecord::new("A", 3000.0, 0, "v1.0"),
            LaunchRecord::new("B", 4000.0, 0, "B4"),
            LaunchRecord::new("B", 5000.0, 1, "B4"),
        ])
        .unwrap()
    }

    #[test]
    fn test_all_sites_counts_successes_per_site() {
        let spec = success_pie(&sample(), ALL_SITES);
        assert_eq!(spec.labels, vec!["A", "B"]);
        assert_eq!(spec.values, vec![2, 1]);
        assert_eq!(spec.title, "Total Successful launches by Site");
    }

    #[test]
    fn test_all_sites_values_sum_to_total_successes() {
        let table = sample();
        let total_successes = table.records().iter().filter(|r| r.is_success()).count() as u64;
        let spec = success_pie(&table, ALL_SITES);
        assert_eq!(spec.values.iter().sum::<u64>(), total_successes);
    }

    #[test]
    fn test_single_site_partitions_by_outcome() {
        let spec = success_pie(&sample(), "A");
        assert_eq!(spec.labels, vec!["0", "1"]);
        assert_eq!(spec.values, vec![1, 2]);
        assert_eq!(spec.title, "Total Successful launches for A");
    }

    #[test]
    fn test_single_site_buckets_sum_to_site_rows() {
        let table = sample();
        for site in table.sites() {
            let site_rows = table.records().iter().filter(|r| r.site == site).count() as u64;
            let spec = success_pie(&table, &site);
            assert_eq!(spec.values.iter().sum::<u64>(), site_rows);
        }
    }

    #[test]
    fn test_unknown_site_yields_empty_spec() {
        let spec = success_pie(&sample(), "Nowhere");
        assert!(spec.labels.is_empty());
        assert!(spec.values.is_empty());
        assert_eq!(spec.title, "Total Successful launches for Nowhere");
    }

    #[test]
    fn test_site_with_only_failures_has_single_bucket() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("C", 1000.0, 0, "FT"),
            LaunchRecord::new("C", 2000.0, 0, "FT"),
        ])
        .unwrap();
        let spec = success_pie(&table, "C");
        assert_eq!(spec.labels, vec!["0"]);
        assert_eq!(spec.values, vec![2]);
    }

    #[test]
    fn test_idempotent() {
        let table = sample();
        assert_eq!(success_pie(&table, ALL_SITES), success_pie(&table, ALL_SITES));
        assert_eq!(success_pie(&table, "B"), success_pie(&table, "B"));
    }
}
