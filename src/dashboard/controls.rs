//! Input control definitions
//!
//! Describes the site dropdown and payload slider so the page can build them,
//! along with the initial selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::binding::InputId;
use crate::data::LaunchTable;
use crate::query::{FilterState, ALL_SITES};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Most marks a slider may carry; the page lays them out in a single row
pub const MAX_SLIDER_MARKS: usize = 100;

/// Slider bounds and step, in kilograms
///
/// Always finite with `min <= max`, a positive step and at most
/// [`MAX_SLIDER_MARKS`] marks. Deserialization goes through the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSliderBounds")]
pub struct SliderBounds {
    min: f64,
    max: f64,
    step: f64,
}

/// Unvalidated `[slider]` config section
#[derive(Deserialize)]
struct RawSliderBounds {
    #[serde(default = "default_slider_min")]
    min: f64,
    #[serde(default = "default_slider_max")]
    max: f64,
    #[serde(default = "default_slider_step")]
    step: f64,
}

impl TryFrom<RawSliderBounds> for SliderBounds {
    type Error = SliderBoundsError;

    fn try_from(raw: RawSliderBounds) -> Result<Self, Self::Error> {
        SliderBounds::new(raw.min, raw.max, raw.step)
    }
}

/// Rejected slider bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderBoundsError {
    #[error("Slider bounds must be finite, got [{min}, {max}]")]
    NonFinite { min: f64, max: f64 },

    #[error("Slider bounds are inverted: min {min} > max {max}")]
    Inverted { min: f64, max: f64 },

    #[error("Slider step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("Slider step {step} gives more than {limit} marks")]
    TooManyMarks { step: f64, limit: usize },
}

fn default_slider_min() -> f64 {
    0.0
}

fn default_slider_max() -> f64 {
    10_000.0
}

fn default_slider_step() -> f64 {
    1_000.0
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            min: default_slider_min(),
            max: default_slider_max(),
            step: default_slider_step(),
        }
    }
}

impl SliderBounds {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, SliderBoundsError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SliderBoundsError::NonFinite { min, max });
        }
        if min > max {
            return Err(SliderBoundsError::Inverted { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SliderBoundsError::InvalidStep(step));
        }
        // Checked in f64 so a tiny step cannot overflow the cast below
        if ((max - min) / step).floor() + 1.0 > MAX_SLIDER_MARKS as f64 {
            return Err(SliderBoundsError::TooManyMarks {
                step,
                limit: MAX_SLIDER_MARKS,
            });
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// One labelled mark per step across the bounds
    pub fn marks(&self) -> Vec<SliderMark> {
        let count = ((self.max - self.min) / self.step).floor() as usize;
        (0..=count)
            .map(|i| SliderMark::at(self.min + i as f64 * self.step))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl SliderMark {
    fn at(value: f64) -> Self {
        Self {
            value,
            label: format!("{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownControl {
    pub id: InputId,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSliderControl {
    pub id: InputId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: [f64; 2],
}

/// Everything the page needs to build its controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: DropdownControl,
    pub payload_slider: RangeSliderControl,
    pub initial_state: FilterState,
}

impl DashboardLayout {
    pub fn build(table: &LaunchTable, bounds: SliderBounds) -> Self {
        let initial_state = FilterState::initial(table);

        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(table.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            title: DASHBOARD_TITLE.to_string(),
            site_dropdown: DropdownControl {
                id: InputId::SiteDropdown,
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            payload_slider: RangeSliderControl {
                id: InputId::PayloadSlider,
                min: bounds.min(),
                max: bounds.max(),
                step: bounds.step(),
                marks: bounds.marks(),
                value: initial_state.payload.as_array(),
            },
            initial_state,
        }
    }
}
