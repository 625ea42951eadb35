//! Reactive bindings
//!
//! A binding ties one output chart to the inputs it depends on and to a pure
//! function that computes the chart from the table and the filter state.

use serde::{Deserialize, Serialize};

use super::figure::{pie_figure, scatter_figure, Figure};
use crate::data::LaunchTable;
use crate::query::{payload_scatter, site_summary, FilterState, QueryResult};

/// Input controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl InputId {
    pub fn as_str(self) -> &'static str {
        match self {
            InputId::SiteDropdown => "site-dropdown",
            InputId::PayloadSlider => "payload-slider",
        }
    }
}

/// Output charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    PayloadScatterChart,
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::PayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for OutputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure recomputation from (table, state) to a figure
pub type ComputeFn = fn(&LaunchTable, &FilterState) -> QueryResult<Figure>;

/// One output and the inputs that trigger it
#[derive(Clone)]
pub struct Binding {
    pub output: OutputId,
    pub inputs: &'static [InputId],
    compute: ComputeFn,
}

impl Binding {
    pub fn new(output: OutputId, inputs: &'static [InputId], compute: ComputeFn) -> Self {
        Self {
            output,
            inputs,
            compute,
        }
    }

    pub fn depends_on(&self, input: InputId) -> bool {
        self.inputs.contains(&input)
    }

    pub fn compute(&self, table: &LaunchTable, state: &FilterState) -> QueryResult<Figure> {
        (self.compute)(table, state)
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

/// Site dropdown → pie chart
pub fn success_pie_binding() -> Binding {
    Binding::new(
        OutputId::SuccessPieChart,
        &[InputId::SiteDropdown],
        success_pie_chart,
    )
}

/// Site dropdown + payload slider → scatter chart
pub fn payload_scatter_binding() -> Binding {
    Binding::new(
        OutputId::PayloadScatterChart,
        &[InputId::SiteDropdown, InputId::PayloadSlider],
        payload_scatter_chart,
    )
}

fn success_pie_chart(table: &LaunchTable, state: &FilterState) -> QueryResult<Figure> {
    state.site.validate(table)?;
    let summary = site_summary(table, &state.site);
    Ok(pie_figure(&state.site, &summary))
}

fn payload_scatter_chart(table: &LaunchTable, state: &FilterState) -> QueryResult<Figure> {
    state.site.validate(table)?;
    let points = payload_scatter(table, &state.site, state.payload);
    Ok(scatter_figure(&state.site, state.payload, &points))
}
