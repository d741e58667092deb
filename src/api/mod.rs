//! Launchboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page
//!
//! ## Charts
//! - `GET /api/v1/charts/pie?site=ALL` - Success pie chart
//! - `GET /api/v1/charts/scatter?site=ALL&low=0&high=10000` - Payload scatter chart
//!
//! ## Layout
//! - `GET /api/v1/layout` - Controls, defaults and outputs
//! - `GET /api/v1/sites` - Launch sites and payload bounds
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Reactive dashboard session
//!
//! # Example
//!
//! ```rust,ignore
//! use launchboard::api::{serve, ApiConfig, AppState};
//! use launchboard::dataset::load_dataset;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(load_dataset(Path::new("spacex_launch_dash.csv"))?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
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

use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Chart routes
        .route("/charts/pie", get(routes::charts::pie_chart))
        .route("/charts/scatter", get(routes::charts::scatter_chart))
        // Layout routes
        .route("/layout", get(routes::layout::get_layout))
        .route("/sites", get(routes::layout::list_sites));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/ws", get(websocket_handler))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::page::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Launchboard listening on http://{}", addr);

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
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
    use crate::dataset::{Dataset, LaunchRecord, Outcome};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "F9 v1.1 B1003", "v1.1"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "F9 FT B1021", "FT"),
            LaunchRecord::new("B", 3000.0, Outcome::Success, "F9 B4 B1039", "B4"),
        ]);
        let state = AppState::new(Arc::new(dataset), ApiConfig::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, json) = get_json(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 3);
        assert_eq!(json["sessions"], 0);
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("success-pie-chart"));
    }

    #[tokio::test]
    async fn test_pie_all_sites() {
        let (status, json) = get_json(create_test_app(), "/api/v1/charts/pie?site=ALL").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["slices"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_pie_defaults_to_all_sites() {
        let (_, json) = get_json(create_test_app(), "/api/v1/charts/pie").await;
        assert_eq!(
            json["title"],
            "Proportion of Successful Launches by Launch Site"
        );
    }

    #[tokio::test]
    async fn test_pie_single_site() {
        let (status, json) = get_json(create_test_app(), "/api/v1/charts/pie?site=A").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Total Successful Launches for site A");
        assert_eq!(json["legend_title"], "Launch Outcome");
    }

    #[tokio::test]
    async fn test_pie_unknown_site_is_empty() {
        let (status, json) = get_json(create_test_app(), "/api/v1/charts/pie?site=Nowhere").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["slices"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scatter_range() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/scatter?site=ALL&low=0&high=2000",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["kind"], "scatter");
        assert_eq!(json["points"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_scatter_defaults_to_full_range() {
        let (_, json) = get_json(create_test_app(), "/api/v1/charts/scatter").await;
        assert_eq!(json["points"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_scatter_inverted_range_is_empty() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/scatter?low=2000&high=100",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["points"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scatter_non_numeric_bound_rejected() {
        let (status, _) = get_json(
            create_test_app(),
            "/api/v1/charts/scatter?low=abc",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_scatter_non_finite_bound_rejected() {
        let (status, json) = get_json(
            create_test_app(),
            "/api/v1/charts/scatter?low=0&high=inf",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_layout() {
        let (status, json) = get_json(create_test_app(), "/api/v1/layout").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dropdown"]["id"], "site-dropdown");
        assert_eq!(json["dropdown"]["options"].as_array().unwrap().len(), 3);
        assert_eq!(json["slider"]["min"], 500.0);
        assert_eq!(json["slider"]["max"], 3500.0);
    }

    #[tokio::test]
    async fn test_sites() {
        let (status, json) = get_json(create_test_app(), "/api/v1/sites").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["sites"], serde_json::json!(["A", "B"]));
        assert_eq!(json["records"], 3);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, json) = get_json(create_test_app(), "/api/v1/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
