//! Reactive Dashboard
//!
//! Wires the two input controls to the two output charts.
//!
//! ## Architecture
//!
//! - **Binding**: one output, the inputs it depends on, and a pure compute function
//! - **Controller**: runs the bindings affected by an input change
//! - **Session**: one client's current `FilterState`
//! - **Figure**: Plotly-compatible chart JSON
//! - **Controls**: dropdown and slider definitions sent to the page
//!
//! ## Bindings
//!
//! | Output                          | Inputs                            |
//! |---------------------------------|-----------------------------------|
//! | `success-pie-chart`             | `site-dropdown`                   |
//! | `success-payload-scatter-chart` | `site-dropdown`, `payload-slider` |

mod binding;
mod controller;
mod controls;
mod figure;
mod session;

pub use binding::{
    payload_scatter_binding, success_pie_binding, Binding, ComputeFn, InputId, OutputId,
};
pub use controller::{ChartUpdate, DashboardController};
pub use controls::{
    DashboardLayout, DropdownControl, DropdownOption, RangeSliderControl, SliderBounds,
    SliderBoundsError, SliderMark, DASHBOARD_TITLE, MAX_SLIDER_MARKS,
};
pub use figure::{
    pie_figure, scatter_figure, Annotation, Axis, Figure, Layout, Title, Trace,
    OUTCOME_AXIS_TITLE, PAYLOAD_AXIS_TITLE,
};
pub use session::{InputEvent, Session};
