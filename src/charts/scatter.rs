//! Scatter chart filtering
//!
//! Restricts the table to the selected site and to payload masses
//! STRICTLY inside the slider bounds; rows sitting exactly on a bound
//! are excluded.

use crate::charts::{ScatterPoint, ScatterSpec};
use crate::data::{LaunchTable, ALL_SITES};

/// Filter the table into a scatter chart spec
///
/// The payload mask is applied to the site-restricted subset, not
/// independently. Inverted or out-of-range bounds simply produce an
/// empty point set.
pub fn payload_scatter(table: &LaunchTable, selected_site: &str, low: f64, high: f64) -> ScatterSpec {
    let points: Vec<ScatterPoint> = table
        .records()
        .iter()
        .filter(|r| selected_site == ALL_SITES || r.site == selected_site)
        .filter(|r| r.payload_mass_kg > low && r.payload_mass_kg < high)
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect();

    let title = if selected_site == ALL_SITES {
        "Correlation between Payload and Success for all Sites".to_string()
    } else {
        format!("Correlation between Payload and Success for {}", selected_site)
    };

    ScatterSpec {
        points,
        x_field: "Payload Mass (kg)".to_string(),
        y_field: "class".to_string(),
        color_field: "Booster Version Category".to_string(),
        title,
    }
}
