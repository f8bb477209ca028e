//! Launchboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page (dropdown, slider, two charts)
//!
//! ## Widgets
//! - `GET /api/v1/sites` - Dropdown options
//! - `GET /api/v1/payload-range` - Slider domain and initial range
//!
//! ## Charts
//! - `GET /api/v1/charts/pie?site=S` - Success pie spec
//! - `GET /api/v1/charts/scatter?site=S&low=L&high=H` - Scatter spec
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use launchboard::api::{build_router, serve, ApiConfig, AppState};
//! use launchboard::data::load_csv;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = Arc::new(load_csv(Path::new("spacex_launch_dash.csv"))?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(table, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Widget routes
        .route("/sites", get(routes::widgets::list_sites))
        .route("/payload-range", get(routes::widgets::payload_range))
        // Chart routes
        .route("/charts/pie", get(routes::charts::pie_chart))
        .route("/charts/scatter", get(routes::charts::scatter_chart));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Launchboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Launchboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LaunchRecord, LaunchTable};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, 0, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 2500.0, 1, "FT"),
            LaunchRecord::new("KSC LC-39A", 4500.0, 1, "B4"),
            LaunchRecord::new("KSC LC-39A", 9600.0, 1, "B4"),
        ])
        .unwrap();

        let state = AppState::new(Arc::new(table), ApiConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_health_probes() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let app = create_test_app();
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_full_health_reports_dataset() {
        let (status, body) = get_json(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 4);
        assert_eq!(body["sites"], 2);
    }

    #[tokio::test]
    async fn test_sites_has_sentinel_first() {
        let (status, body) = get_json(create_test_app(), "/api/v1/sites").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["options"][0], "All Sites");
        assert_eq!(body["options"][1], "CCAFS LC-40");
        assert_eq!(body["options"][2], "KSC LC-39A");
        assert_eq!(body["selected"], "All Sites");
    }

    #[tokio::test]
    async fn test_payload_range_mixes_fixed_domain_and_data_bounds() {
        let (status, body) = get_json(create_test_app(), "/api/v1/payload-range").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["min"], 0.0);
        assert_eq!(body["max"], 12000.0);
        assert_eq!(body["step"], 1000.0);
        assert_eq!(body["selected"][0], 500.0);
        assert_eq!(body["selected"][1], 9600.0);
    }

    #[tokio::test]
    async fn test_pie_defaults_to_all_sites() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/pie").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["labels"][0], "CCAFS LC-40");
        assert_eq!(body["labels"][1], "KSC LC-39A");
        assert_eq!(body["values"][0], 1);
        assert_eq!(body["values"][1], 2);
    }

    #[tokio::test]
    async fn test_pie_single_site() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/charts/pie?site=CCAFS%20LC-40").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["labels"][0], "0");
        assert_eq!(body["labels"][1], "1");
        assert_eq!(body["title"], "Total Successful launches for CCAFS LC-40");
    }

    #[tokio::test]
    async fn test_pie_unknown_site_is_empty_not_error() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/pie?site=Nowhere").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["labels"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_scatter_strict_bounds() {
        // 500 sits exactly on the low bound and must be excluded.
        let (status, body) =
            get_json(create_test_app(), "/api/v1/charts/scatter?low=500&high=5000").await;
        assert_eq!(status, StatusCode::OK);
        let points = body["points"].as_array().unwrap();
        assert_eq!(points.len(), 2);
    }

    #[tokio::test]
    async fn test_scatter_defaults_to_slider_domain() {
        let (status, body) = get_json(create_test_app(), "/api/v1/charts/scatter").await;
        assert_eq!(status, StatusCode::OK);
        // 0 < payload < 12000 keeps all four rows.
        assert_eq!(body["points"].as_array().unwrap().len(), 4);
        assert_eq!(body["x_field"], "Payload Mass (kg)");
    }

    #[tokio::test]
    async fn test_scatter_non_numeric_bound_is_validation_error() {
        let (status, body) =
            get_json(create_test_app(), "/api/v1/charts/scatter?low=heavy").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
