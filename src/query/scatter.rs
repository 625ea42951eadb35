//! Payload scatter query
//!
//! Feeds the scatter chart: one point per launch whose payload falls in the
//! selected range, optionally restricted to one site.

use serde::Serialize;

use super::filter::SiteSelection;
use crate::data::{LaunchTable, Outcome, PayloadRange};

/// One plotted launch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

/// Filter launches by payload range and site, preserving table order
pub fn payload_scatter(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<ScatterPoint> {
    table
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_kg))
        .filter(|r| selection.matches(&r.site))
        .map(|r| ScatterPoint {
            payload_kg: r.payload_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect()
}
