//! Chart Routes
//!
//! Endpoints that recompute the chart specs from current widget values.
//! Every dropdown or slider change on the page triggers one GET here.
//!
//! - GET /api/v1/charts/pie - Success pie chart spec
//! - GET /api/v1/charts/scatter - Payload/success scatter spec

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PieParams, ScatterParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{payload_scatter, success_pie, PieSpec, ScatterSpec};
use crate::data::{ALL_SITES, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN};

/// GET /api/v1/charts/pie
///
/// Recompute the pie spec for the selected site. Unknown sites return
/// an empty spec with 200.
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PieParams>,
) -> Json<PieSpec> {
    let site = params.site.as_deref().unwrap_or(ALL_SITES);
    Json(success_pie(&state.table, site))
}

/// GET /api/v1/charts/scatter
///
/// Recompute the scatter spec for the selected site and payload range.
/// Missing bounds fall back to the absolute slider domain; non-numeric
/// bounds are a validation error.
pub async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterParams>,
) -> ApiResult<Json<ScatterSpec>> {
    let site = params.site.as_deref().unwrap_or(ALL_SITES);
    let low = parse_bound(params.low.as_deref(), "low", PAYLOAD_SLIDER_MIN)?;
    let high = parse_bound(params.high.as_deref(), "high", PAYLOAD_SLIDER_MAX)?;

    Ok(Json(payload_scatter(&state.table, site, low, high)))
}

/// Parse an optional payload bound query parameter
fn parse_bound(raw: Option<&str>, name: &str, default: f64) -> ApiResult<f64> {
    match raw {
        None => Ok(default),
        Some(s) => s.parse::<f64>().map_err(|_| {
            ApiError::Validation(format!("Invalid {} bound: {:?} is not a number", name, s))
        }),
    }
}
