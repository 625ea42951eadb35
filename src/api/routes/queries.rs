//! Query Routes
//!
//! Raw query results as JSON.
//!
//! - GET /api/v1/summary?site= - Pie chart data
//! - GET /api/v1/scatter?site=&min=&max= - Scatter chart data

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ScatterParams, ScatterPointDto, ScatterResponse, SummaryParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::data::PayloadRange;
use crate::query::{payload_scatter, site_summary, SiteSummary};

/// GET /api/v1/summary
///
/// A site with no records yields an empty summary.
pub async fn summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Json<SiteSummary> {
    Json(site_summary(&state.table, &params.site))
}

/// GET /api/v1/scatter
///
/// Missing bounds default to the table's global payload range.
pub async fn scatter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterParams>,
) -> ApiResult<Json<ScatterResponse>> {
    let global = state.table.payload_range();
    let range = PayloadRange::new(
        params.min.unwrap_or(global.min),
        params.max.unwrap_or(global.max),
    )?;

    let points: Vec<ScatterPointDto> = payload_scatter(&state.table, &params.site, range)
        .into_iter()
        .map(|p| ScatterPointDto {
            payload_kg: p.payload_kg,
            class: p.outcome,
            booster_category: p.booster_category,
        })
        .collect();

    tracing::debug!(
        site = %params.site,
        range = %range,
        points = points.len(),
        "Scatter query"
    );

    Ok(Json(ScatterResponse {
        site: params.site,
        min: range.min,
        max: range.max,
        total: points.len(),
        points,
    }))
}
