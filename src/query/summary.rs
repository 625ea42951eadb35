//! Site summary query
//!
//! Feeds the pie chart: success counts per site when all sites are selected,
//! or the success/failure split of a single site.

use serde::Serialize;

use super::filter::SiteSelection;
use crate::data::{LaunchTable, Outcome};

/// Number of successful launches at one site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteCount {
    pub site: String,
    pub successes: usize,
}

/// Number of launches with one outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: usize,
}

/// Result of [`site_summary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SiteSummary {
    /// All sites: successes grouped by site, in first-seen order
    SuccessBySite { sites: Vec<SiteCount> },
    /// One site: non-zero outcome counts, in first-seen order
    OutcomeSplit {
        site: String,
        outcomes: Vec<OutcomeCount>,
    },
}

impl SiteSummary {
    /// Sum of all counts in the result
    pub fn total(&self) -> usize {
        match self {
            SiteSummary::SuccessBySite { sites } => sites.iter().map(|s| s.successes).sum(),
            SiteSummary::OutcomeSplit { outcomes, .. } => outcomes.iter().map(|o| o.count).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SiteSummary::SuccessBySite { sites } => sites.is_empty(),
            SiteSummary::OutcomeSplit { outcomes, .. } => outcomes.is_empty(),
        }
    }

    /// Successful launches covered by the result
    pub fn successes(&self) -> usize {
        match self {
            SiteSummary::SuccessBySite { .. } => self.total(),
            SiteSummary::OutcomeSplit { .. } => self.count_of(Outcome::Success),
        }
    }

    /// Failed launches covered by the result (always 0 for the all-sites view)
    pub fn failures(&self) -> usize {
        self.count_of(Outcome::Failure)
    }

    fn count_of(&self, outcome: Outcome) -> usize {
        match self {
            SiteSummary::SuccessBySite { .. } => 0,
            SiteSummary::OutcomeSplit { outcomes, .. } => outcomes
                .iter()
                .find(|o| o.outcome == outcome)
                .map(|o| o.count)
                .unwrap_or(0),
        }
    }
}

/// Compute the pie chart data for a site selection
///
/// A site with no records yields an empty split rather than an error.
pub fn site_summary(table: &LaunchTable, selection: &SiteSelection) -> SiteSummary {
    match selection {
        SiteSelection::All => {
            // Linear lookup keeps first-seen site order; there are only a handful of sites
            let mut sites: Vec<SiteCount> = Vec::new();
            for record in table.records().iter().filter(|r| r.outcome.is_success()) {
                match sites.iter_mut().find(|s| s.site == record.site) {
                    Some(entry) => entry.successes += 1,
                    None => sites.push(SiteCount {
                        site: record.site.clone(),
                        successes: 1,
                    }),
                }
            }
            SiteSummary::SuccessBySite { sites }
        }
        SiteSelection::Site(site) => {
            let mut outcomes: Vec<OutcomeCount> = Vec::with_capacity(2);
            for record in table.records().iter().filter(|r| &r.site == site) {
                match outcomes.iter_mut().find(|o| o.outcome == record.outcome) {
                    Some(entry) => entry.count += 1,
                    None => outcomes.push(OutcomeCount {
                        outcome: record.outcome,
                        count: 1,
                    }),
                }
            }
            SiteSummary::OutcomeSplit {
                site: site.clone(),
                outcomes,
            }
        }
    }
}
