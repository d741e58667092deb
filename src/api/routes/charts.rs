//! Chart Routes
//!
//! Stateless chart endpoints, one per computation.
//!
//! - GET /api/v1/charts/pie?site=ALL
//! - GET /api/v1/charts/scatter?site=ALL&low=0&high=10000

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{PieParams, ScatterParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{aggregate_with_theme, correlate_with_theme, ChartSpec, PayloadRange};

/// GET /api/v1/charts/pie
///
/// Success pie chart for the given site. Unknown sites give an empty chart.
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PieParams>,
) -> Json<ChartSpec> {
    Json(aggregate_with_theme(&state.dataset, &params.site, &state.theme))
}

/// GET /api/v1/charts/scatter
///
/// Payload vs. outcome scatter chart. Missing bounds default to the slider
/// range; an inverted range gives an empty chart.
pub async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterParams>,
) -> ApiResult<Json<ChartSpec>> {
    let range = payload_range(&state, &params)?;
    Ok(Json(correlate_with_theme(
        &state.dataset,
        &params.site,
        range,
        &state.theme,
    )))
}

fn payload_range(state: &AppState, params: &ScatterParams) -> ApiResult<PayloadRange> {
    let low = params.low.unwrap_or(state.layout.slider.min);
    let high = params.high.unwrap_or(state.layout.slider.max);

    if !low.is_finite() || !high.is_finite() {
        return Err(ApiError::Validation(
            "low and high must be finite numbers".to_string(),
        ));
    }

    Ok(PayloadRange::new(low, high))
}
