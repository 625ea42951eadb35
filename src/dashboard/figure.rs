//! Chart figures
//!
//! Plotly-compatible figure descriptions (`{data, layout}`) built from query
//! results. The page hands these straight to `Plotly.react`.

use serde::Serialize;

use crate::data::PayloadRange;
use crate::query::{ScatterPoint, SiteSelection, SiteSummary};

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_TITLE: &str = "Launch Outcome";

/// A complete chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One plotted series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<usize>,
    },
    Scatter {
        name: String,
        mode: String,
        x: Vec<f64>,
        y: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

/// Centered text overlay, used for empty and error states
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub showarrow: bool,
    pub xref: String,
    pub yref: String,
    pub x: f64,
    pub y: f64,
}

impl Annotation {
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            showarrow: false,
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            x: 0.5,
            y: 0.5,
        }
    }
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Figure {
    /// A figure with no traces and a centered message
    pub fn message(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout {
                title: Title::new(title),
                xaxis: None,
                yaxis: None,
                annotations: vec![Annotation::centered(text)],
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

pub fn pie_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Total Success Launches by Site".to_string(),
        SiteSelection::Site(site) => format!("Success Launches at {}", site),
    }
}

pub fn scatter_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Payload vs Launch Outcome for All Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs Launch Outcome at {}", site),
    }
}

/// Pie chart of a site summary
pub fn pie_figure(selection: &SiteSelection, summary: &SiteSummary) -> Figure {
    let title = pie_title(selection);
    if summary.is_empty() {
        return Figure::message(title, "No data");
    }

    let (labels, values): (Vec<String>, Vec<usize>) = match summary {
        SiteSummary::SuccessBySite { sites } => sites
            .iter()
            .map(|s| (s.site.clone(), s.successes))
            .unzip(),
        SiteSummary::OutcomeSplit { outcomes, .. } => outcomes
            .iter()
            .map(|o| (o.outcome.to_string(), o.count))
            .unzip(),
    };

    Figure {
        data: vec![Trace::Pie { labels, values }],
        layout: Layout {
            title: Title::new(title),
            xaxis: None,
            yaxis: None,
            annotations: Vec::new(),
        },
    }
}

/// Scatter chart of payload against outcome, one trace per booster category
pub fn scatter_figure(
    selection: &SiteSelection,
    range: PayloadRange,
    points: &[ScatterPoint],
) -> Figure {
    // Traces stay in first-seen category order, which fixes the legend order
    let mut traces: Vec<Trace> = Vec::new();
    for point in points {
        let existing = traces.iter().position(|t| {
            matches!(t, Trace::Scatter { name, .. } if name == &point.booster_category)
        });
        match existing {
            Some(idx) => {
                if let Trace::Scatter { x, y, .. } = &mut traces[idx] {
                    x.push(point.payload_kg);
                    y.push(point.outcome.class());
                }
            }
            None => traces.push(Trace::Scatter {
                name: point.booster_category.clone(),
                mode: "markers".to_string(),
                x: vec![point.payload_kg],
                y: vec![point.outcome.class()],
            }),
        }
    }

    let annotations = if traces.is_empty() {
        vec![Annotation::centered("No launches in the selected payload range")]
    } else {
        Vec::new()
    };

    Figure {
        data: traces,
        layout: Layout {
            title: Title::new(scatter_title(selection)),
            xaxis: Some(Axis {
                title: Title::new(PAYLOAD_AXIS_TITLE),
                range: Some(range.as_array()),
            }),
            yaxis: Some(Axis {
                title: Title::new(OUTCOME_AXIS_TITLE),
                range: None,
            }),
            annotations,
        },
    }
}
