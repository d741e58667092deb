//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::charts::SiteSelection;
use crate::dataset::PayloadBounds;

// ============================================
// CHART DTOs
// ============================================

/// Pie chart query parameters
#[derive(Debug, Deserialize)]
pub struct PieParams {
    /// "ALL" or a site name (default: ALL)
    #[serde(default)]
    pub site: SiteSelection,
}

/// Scatter chart query parameters
#[derive(Debug, Deserialize)]
pub struct ScatterParams {
    /// "ALL" or a site name (default: ALL)
    #[serde(default)]
    pub site: SiteSelection,
    /// Lower payload bound in kg (default: slider minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (default: slider maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Site list response
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    /// Distinct launch sites, sorted
    pub sites: Vec<String>,
    /// Observed payload extremes (absent for an empty dataset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_bounds: Option<PayloadBounds>,
    /// Number of launch records
    pub records: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset status: ok, empty
    pub dataset: String,
    /// Number of launch records loaded
    pub records: usize,
    /// When the dataset was loaded (RFC 3339)
    pub loaded_at: String,
    /// Active dashboard sessions
    pub sessions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
