//! Radar chart specification builder
//!
//! Turns a validated workplan into a declarative polar-chart specification:
//! one filled trace over the (task area, percentage) pairs, radial axis
//! scaled to the largest value. The specification serializes to the
//! `{"data": [...], "layout": {...}}` figure shape the rendering collaborator
//! consumes; this module renders no pixels and performs no I/O.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use tracing::debug;

use crate::domain::Workplan;
use crate::error::WorkplanError;

/// Fill and line color for the workplan trace
pub const FILL_COLOR: &str = "#a1d99b";

/// Margin added above the largest value to set the radial axis upper bound
const AXIS_MARGIN: i64 = 5;

/// Declarative chart specification: one or more traces plus layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<ScatterPolar>,
    pub layout: Layout,
}

/// A single polar trace: radii paired with category axes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPolar {
    pub r: Vec<i64>,
    pub theta: Vec<String>,
    pub fill: String,
    pub fillcolor: String,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub font: Font,
    pub polar: Polar,
    pub showlegend: bool,
    pub hovermode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polar {
    pub radialaxis: RadialAxis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadialAxis {
    pub visible: bool,
    pub color: String,
    pub linecolor: String,
    pub range: [i64; 2],
}

impl Figure {
    /// Build the radar chart for a validated workplan
    ///
    /// Categories and radii mirror the workplan's insertion order exactly,
    /// and the radial axis spans `[0, max(values) + 5]`. Identical inputs
    /// produce identical figures.
    pub fn radar(title: &str, plan: &Workplan) -> Result<Self, WorkplanError> {
        let max = plan.max_value().ok_or_else(|| WorkplanError::ConstructionFailure {
            reason: "empty workplan has no axis range".to_string(),
        })?;

        let theta: Vec<String> = plan.labels().map(str::to_string).collect();
        let r: Vec<i64> = plan.values().collect();
        debug!(title, areas = theta.len(), "building radar chart");

        Ok(Self {
            data: vec![ScatterPolar {
                r,
                theta,
                fill: "toself".to_string(),
                fillcolor: FILL_COLOR.to_string(),
                line: Line {
                    color: FILL_COLOR.to_string(),
                },
            }],
            layout: Layout {
                title: format!("{title}\nResponsibilities"),
                font: Font {
                    color: FILL_COLOR.to_string(),
                },
                polar: Polar {
                    radialaxis: RadialAxis {
                        visible: true,
                        color: "black".to_string(),
                        linecolor: "green".to_string(),
                        range: [0, max + AXIS_MARGIN],
                    },
                },
                showlegend: false,
                hovermode: "closest".to_string(),
            },
        })
    }

    /// Task-area labels of the workplan trace, in axis order
    pub fn categories(&self) -> &[String] {
        self.data.first().map(|trace| trace.theta.as_slice()).unwrap_or_default()
    }

    /// Radii of the workplan trace, in axis order
    pub fn values(&self) -> &[i64] {
        self.data.first().map(|trace| trace.r.as_slice()).unwrap_or_default()
    }

    /// Radial axis bounds
    pub fn axis_range(&self) -> [i64; 2] {
        self.layout.polar.radialaxis.range
    }

    /// Two-line chart heading
    pub fn title(&self) -> &str {
        &self.layout.title
    }
}

/// Build the radar chart for a raw workplan mapping
///
/// Runs workplan validation first; validation errors propagate to the
/// caller unchanged.
pub fn position_chart(title: &str, workplan: &Value) -> Result<Figure, WorkplanError> {
    let plan = Workplan::from_value(workplan)?;
    Figure::radar(title, &plan)
}
