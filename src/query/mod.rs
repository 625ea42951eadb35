//! Launch Queries
//!
//! Pure, read-only projections over the [`LaunchTable`](crate::data::LaunchTable):
//!
//! - **Filter**: the dashboard selection (`SiteSelection`, `FilterState`)
//! - **Summary**: per-site success counts or one site's success/failure split
//! - **Scatter**: launches filtered by payload range and site
//!
//! # Example
//!
//! ```rust,ignore
//! use spacex_dash::query::{payload_scatter, site_summary, SiteSelection};
//!
//! let summary = site_summary(&table, &SiteSelection::All);
//! let points = payload_scatter(&table, &SiteSelection::parse("KSC LC-39A"), table.payload_range());
//! ```

mod error;
mod filter;
mod scatter;
mod summary;

pub use error::{QueryError, QueryResult};
pub use filter::{FilterState, SiteSelection, ALL_SITES};
pub use scatter::{payload_scatter, ScatterPoint};
pub use summary::{site_summary, OutcomeCount, SiteCount, SiteSummary};
