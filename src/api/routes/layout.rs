//! Layout Routes
//!
//! - GET /api/v1/layout - Page layout (controls, defaults, outputs)
//! - GET /api/v1/sites - Launch sites and payload bounds

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SitesResponse;
use crate::api::state::AppState;
use crate::dashboard::Layout;

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/sites
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    Json(SitesResponse {
        sites: state.dataset.sites(),
        payload_bounds: state.dataset.payload_bounds(),
        records: state.dataset.len(),
    })
}
