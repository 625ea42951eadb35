//! Dashboard controller
//!
//! Owns the launch table and the registered bindings. On an input change it
//! re-runs every binding that depends on that input and returns the new
//! figures. Query failures never escape: they become an empty figure that
//! carries the error text.

use serde::Serialize;
use std::sync::Arc;

use super::binding::{payload_scatter_binding, success_pie_binding, Binding, InputId, OutputId};
use super::controls::{DashboardLayout, SliderBounds};
use super::figure::Figure;
use crate::data::LaunchTable;
use crate::query::FilterState;

/// New figure for one output chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartUpdate {
    pub output: OutputId,
    pub figure: Figure,
}

/// Binds input controls to output charts over an immutable table
#[derive(Debug)]
pub struct DashboardController {
    table: Arc<LaunchTable>,
    bindings: Vec<Binding>,
    slider: SliderBounds,
}

impl DashboardController {
    /// Controller with the pie and scatter bindings registered
    pub fn new(table: Arc<LaunchTable>, slider: SliderBounds) -> Self {
        Self::with_bindings(
            table,
            slider,
            vec![success_pie_binding(), payload_scatter_binding()],
        )
    }

    pub fn with_bindings(
        table: Arc<LaunchTable>,
        slider: SliderBounds,
        bindings: Vec<Binding>,
    ) -> Self {
        Self {
            table,
            bindings,
            slider,
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Control definitions plus the initial selection
    pub fn layout(&self) -> DashboardLayout {
        DashboardLayout::build(&self.table, self.slider)
    }

    /// Starting filter state for a new session
    pub fn initial_state(&self) -> FilterState {
        FilterState::initial(&self.table)
    }

    /// Render every output (initial page load)
    pub fn render_all(&self, state: &FilterState) -> Vec<ChartUpdate> {
        self.bindings
            .iter()
            .map(|binding| self.render(binding, state))
            .collect()
    }

    /// Render the outputs that depend on `changed`, in registration order
    pub fn dispatch(&self, state: &FilterState, changed: InputId) -> Vec<ChartUpdate> {
        let updates: Vec<ChartUpdate> = self
            .bindings
            .iter()
            .filter(|binding| binding.depends_on(changed))
            .map(|binding| self.render(binding, state))
            .collect();

        tracing::debug!(
            input = %changed,
            site = %state.site,
            payload = %state.payload,
            outputs = updates.len(),
            "Dispatched input change"
        );

        updates
    }

    fn render(&self, binding: &Binding, state: &FilterState) -> ChartUpdate {
        let figure = match binding.compute(&self.table, state) {
            Ok(figure) => figure,
            Err(e) => {
                tracing::warn!(
                    output = %binding.output,
                    site = %state.site,
                    error = %e,
                    "Chart query failed, rendering empty figure"
                );
                Figure::message("Chart unavailable", e.to_string())
            }
        };

        ChartUpdate {
            output: binding.output,
            figure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LaunchRecord, Outcome, PayloadRange};
    use crate::query::SiteSelection;

    fn controller() -> DashboardController {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 700.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 9000.0, "FT", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 3000.0, "v1.1", Outcome::Success),
        ])
        .unwrap();
        DashboardController::new(Arc::new(table), SliderBounds::default())
    }

    #[test]
    fn test_render_all_covers_every_output() {
        let controller = controller();
        let updates = controller.render_all(&controller.initial_state());

        let outputs: Vec<OutputId> = updates.iter().map(|u| u.output).collect();
        assert_eq!(
            outputs,
            vec![OutputId::SuccessPieChart, OutputId::PayloadScatterChart]
        );
        assert!(updates.iter().all(|u| !u.figure.is_empty()));
    }

    #[test]
    fn test_slider_change_only_rerenders_scatter() {
        let controller = controller();
        let state = controller
            .initial_state()
            .with_payload(PayloadRange::new(600.0, 5000.0).unwrap());

        let updates = controller.dispatch(&state, InputId::PayloadSlider);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].output, OutputId::PayloadScatterChart);
    }

    #[test]
    fn test_site_change_rerenders_both() {
        let controller = controller();
        let state = controller
            .initial_state()
            .with_site(SiteSelection::parse("KSC LC-39A"));

        let updates = controller.dispatch(&state, InputId::SiteDropdown);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].figure.title(), "Success Launches at KSC LC-39A");
        assert_eq!(updates[1].figure.title(), "Payload vs Launch Outcome at KSC LC-39A");
    }

    #[test]
    fn test_unknown_site_renders_error_figure() {
        let controller = controller();
        let state = controller
            .initial_state()
            .with_site(SiteSelection::parse("Boca Chica"));

        let updates = controller.dispatch(&state, InputId::SiteDropdown);
        assert_eq!(updates.len(), 2);
        for update in updates {
            assert!(update.figure.is_empty());
            assert_eq!(
                update.figure.layout.annotations[0].text,
                "Unknown launch site: Boca Chica"
            );
        }
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let controller = controller();
        let state = controller
            .initial_state()
            .with_site(SiteSelection::parse("CCAFS LC-40"));

        let first = controller.dispatch(&state, InputId::SiteDropdown);
        let second = controller.dispatch(&state, InputId::SiteDropdown);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_bindings() {
        let table = controller().table().clone();
        let controller = DashboardController::with_bindings(
            Arc::new(table),
            SliderBounds::default(),
            vec![success_pie_binding()],
        );

        let updates = controller.dispatch(&controller.initial_state(), InputId::PayloadSlider);
        assert!(updates.is_empty());
        assert_eq!(controller.bindings().len(), 1);
    }
}
