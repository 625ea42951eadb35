//! Core data types for the launch table
//!
//! - `LaunchRecord`: one row of the launch CSV
//! - `LaunchTable`: the immutable, ordered set of records plus derived constants
//! - `Outcome`: the binary `class` label
//! - `PayloadRange`: an inclusive payload mass interval

use serde::{Deserialize, Serialize};

use super::error::{DataLoadError, DataResult};
use crate::query::{QueryError, QueryResult};

/// Binary launch outcome (`class` column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    /// class = 0
    Failure,
    /// class = 1
    Success,
}

impl Outcome {
    /// Numeric class value as it appears in the CSV
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// A single launch (one CSV row)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    /// Launch site name (e.g. "KSC LC-39A")
    pub site: String,
    /// Payload mass in kilograms
    pub payload_kg: f64,
    /// Booster version category (e.g. "FT", "B5")
    pub booster_category: String,
    /// Launch outcome class
    pub outcome: Outcome,
    /// Remaining columns, aligned with `LaunchTable::extra_columns`
    #[serde(skip)]
    pub extra: Vec<String>,
}

impl LaunchRecord {
    /// Create a record with no pass-through columns
    pub fn new(
        site: impl Into<String>,
        payload_kg: f64,
        booster_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            site: site.into(),
            payload_kg,
            booster_category: booster_category.into(),
            outcome,
            extra: Vec::new(),
        }
    }

    /// Builder method: attach pass-through column values
    pub fn extra(mut self, values: Vec<String>) -> Self {
        self.extra = values;
        self
    }
}

/// Inclusive payload mass interval `[min, max]` in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPayloadRange")]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

/// Unvalidated wire form of [`PayloadRange`]
#[derive(Deserialize)]
struct RawPayloadRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawPayloadRange> for PayloadRange {
    type Error = QueryError;

    fn try_from(raw: RawPayloadRange) -> Result<Self, Self::Error> {
        PayloadRange::new(raw.min, raw.max)
    }
}

impl PayloadRange {
    /// Create a range, rejecting inverted or non-finite bounds
    pub fn new(min: f64, max: f64) -> QueryResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(QueryError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive at both ends
    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.min && payload_kg <= self.max
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl std::fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] kg", self.min, self.max)
    }
}

/// Scan the payload column once and return its bounds
///
/// Returns `None` for an empty slice.
pub fn global_payload_range(records: &[LaunchRecord]) -> Option<PayloadRange> {
    let mut iter = records.iter().map(|r| r.payload_kg);
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
    Some(PayloadRange { min, max })
}

/// The launch table, loaded once at startup and never mutated
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    extra_columns: Vec<String>,
    sites: Vec<String>,
    payload_range: PayloadRange,
}

impl LaunchTable {
    /// Build a table and compute its derived constants
    ///
    /// Fails with `DataLoadError::Empty` when `records` is empty, since the
    /// global payload range is undefined.
    pub fn new(records: Vec<LaunchRecord>, extra_columns: Vec<String>) -> DataResult<Self> {
        let payload_range = global_payload_range(&records).ok_or(DataLoadError::Empty)?;

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }

        Ok(Self {
            records,
            extra_columns,
            sites,
            payload_range,
        })
    }

    /// Build a table from records without pass-through columns
    pub fn from_records(records: Vec<LaunchRecord>) -> DataResult<Self> {
        Self::new(records, Vec::new())
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct site names in first-seen order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Minimum and maximum payload across all records
    pub fn payload_range(&self) -> PayloadRange {
        self.payload_range
    }

    /// Names of the columns carried through without interpretation
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }
}
