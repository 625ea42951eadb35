//! # SpaceX Dash
//!
//! SpaceX Launch Records Dashboard - an interactive web dashboard over a static
//! CSV of launch records.
//!
//! ## Features
//!
//! - **Immutable data store**: the CSV is loaded once at startup and shared read-only
//! - **Pure queries**: per-site success counts and payload/outcome scatter data
//! - **Reactive charts**: input changes re-render only the charts that depend on them
//! - **Real-time**: WebSocket sessions push Plotly figures to the page
//!
//! ## Modules
//!
//! - [`data`]: CSV loading and the launch table
//! - [`query`]: Site summary and payload scatter queries
//! - [`dashboard`]: Bindings, controller, sessions and figures
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Dashboard sessions over WebSocket
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spacex_dash::data;
//! use spacex_dash::query::{site_summary, SiteSelection};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = data::load(Path::new("spacex_launch_dash.csv"))?;
//!
//!     let summary = site_summary(&table, &SiteSelection::All);
//!     println!("{} successful launches", summary.successes());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod query;
pub mod websocket;

// Re-export top-level types for convenience
pub use data::{DataLoadError, LaunchRecord, LaunchTable, Outcome, PayloadRange};

pub use query::{
    payload_scatter, site_summary, FilterState, QueryError, ScatterPoint, SiteSelection,
    SiteSummary,
};

pub use dashboard::{
    ChartUpdate, DashboardController, DashboardLayout, Figure, InputEvent, InputId, OutputId,
    Session, SliderBounds,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{ClientMessage, ConnectionHub, HubConfig, HubError, ServerMessage};

pub use config::{Config, ConfigError, DataConfig, LogFormat, LoggingConfig, ServerConfig};
