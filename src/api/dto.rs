//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::dashboard::{ChartUpdate, InputId};
use crate::data::Outcome;
use crate::query::{FilterState, SiteSelection};

// ============================================
// QUERY DTOs
// ============================================

/// Query string for `GET /summary`
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    /// `"ALL"` or a launch site name
    #[serde(default)]
    pub site: SiteSelection,
}

/// Query string for `GET /scatter`
#[derive(Debug, Deserialize)]
pub struct ScatterParams {
    /// `"ALL"` or a launch site name
    #[serde(default)]
    pub site: SiteSelection,
    /// Lower payload bound in kg, defaults to the global minimum
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper payload bound in kg, defaults to the global maximum
    #[serde(default)]
    pub max: Option<f64>,
}

/// Scatter query response
#[derive(Debug, Serialize)]
pub struct ScatterResponse {
    pub site: SiteSelection,
    pub min: f64,
    pub max: f64,
    pub total: usize,
    pub points: Vec<ScatterPointDto>,
}

/// One scatter point
#[derive(Debug, Serialize)]
pub struct ScatterPointDto {
    pub payload_kg: f64,
    pub class: Outcome,
    pub booster_category: String,
}

// ============================================
// CALLBACK DTOs
// ============================================

/// Stateless chart update request
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Full filter state after the interaction
    pub state: FilterState,
    /// Control that changed; absent means render every chart
    #[serde(default)]
    pub changed: Option<InputId>,
}

/// Chart updates for the outputs that depend on the changed input
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub updates: Vec<ChartUpdate>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Active WebSocket sessions
    pub connections: usize,
    /// Session limit before new connections are refused
    pub max_connections: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
