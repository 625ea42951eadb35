//! Launch Data Store
//!
//! Loads the launch CSV once at startup into an immutable [`LaunchTable`].
//! All later access is read-only; queries borrow the table and never mutate it.
//!
//! ## Required columns
//!
//! - `Launch Site`
//! - `Payload Mass (kg)`
//! - `Booster Version Category`
//! - `class` (0 or 1)
//!
//! Any other columns are passed through as raw strings.

mod error;
mod loader;
mod types;

pub use error::{DataLoadError, DataResult};
pub use loader::{
    load, load_from_reader, COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS,
};
pub use types::{global_payload_range, LaunchRecord, LaunchTable, Outcome, PayloadRange};
