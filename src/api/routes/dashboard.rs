//! Dashboard Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Control definitions and initial selection
//! - POST /api/v1/update - Recompute charts for a filter state

use axum::{
    extract::{rejection::JsonRejection, State},
    http::Uri,
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{UpdateRequest, UpdateResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::DashboardLayout;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.controller.layout())
}

/// POST /api/v1/update
///
/// Stateless form of the reactive loop: the client sends its whole filter
/// state and the control that changed, and gets back the affected charts.
/// Query failures come back as figures carrying the error text; a body
/// that does not describe a valid filter state is a validation error.
pub async fn update(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let updates = match req.changed {
        Some(changed) => state.controller.dispatch(&req.state, changed),
        None => state.controller.render_all(&req.state),
    };

    Ok(Json(UpdateResponse { updates }))
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
