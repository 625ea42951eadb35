//! Filter state
//!
//! The dashboard's current selection: one site (or all of them) plus an
//! inclusive payload range. A `FilterState` is a value; every interaction
//! builds a new one rather than editing the old.

use serde::{Deserialize, Serialize};

use super::error::{QueryError, QueryResult};
use crate::data::{LaunchTable, PayloadRange};

/// Wire value of the "all sites" sentinel
pub const ALL_SITES: &str = "ALL";

/// Site dropdown selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a record at `site` passes this selection
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    /// Check the selection against the table's site set
    pub fn validate(&self, table: &LaunchTable) -> QueryResult<()> {
        match self {
            SiteSelection::All => Ok(()),
            SiteSelection::Site(site) if table.has_site(site) => Ok(()),
            SiteSelection::Site(site) => Err(QueryError::UnknownSite(site.clone())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current UI selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterState {
    /// All sites over the table's full payload range
    pub fn initial(table: &LaunchTable) -> Self {
        Self {
            site: SiteSelection::All,
            payload: table.payload_range(),
        }
    }

    /// A new state with the site replaced
    pub fn with_site(&self, site: SiteSelection) -> Self {
        Self {
            site,
            payload: self.payload,
        }
    }

    /// A new state with the payload range replaced
    pub fn with_payload(&self, payload: PayloadRange) -> Self {
        Self {
            site: self.site.clone(),
            payload,
        }
    }
}
