//! Widget Routes
//!
//! Endpoints the page uses to populate its input widgets.
//!
//! - GET /api/v1/sites - Dropdown options
//! - GET /api/v1/payload-range - Slider domain and initial range

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{PayloadRangeResponse, SitesResponse};
use crate::api::state::AppState;
use crate::data::{ALL_SITES, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};

/// GET /api/v1/sites
///
/// Dropdown option list: the all-sites sentinel followed by every
/// distinct site name in first-appearance order.
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    let mut options = vec![ALL_SITES.to_string()];
    options.extend(state.table.sites());

    Json(SitesResponse {
        options,
        selected: ALL_SITES.to_string(),
    })
}

/// GET /api/v1/payload-range
///
/// Slider spec: fixed absolute domain, data-driven initial selection.
pub async fn payload_range(State(state): State<Arc<AppState>>) -> Json<PayloadRangeResponse> {
    let (data_min, data_max) = state.table.payload_bounds();

    Json(PayloadRangeResponse {
        min: PAYLOAD_SLIDER_MIN,
        max: PAYLOAD_SLIDER_MAX,
        step: PAYLOAD_SLIDER_STEP,
        selected: [data_min, data_max],
    })
}
