//! Dashboard Page
//!
//! - GET / - The dashboard page
//! - fallback - JSON 404 for unknown paths

use axum::{http::Uri, response::Html};

use crate::api::error::ApiError;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
