//! Chart adapters
//!
//! Each adapter owns at most one chart instance keyed to a page element. The
//! instance exists only if the element was present when the page was built;
//! otherwise every update is a no-op. Updates replace labels and series
//! wholesale and bump the chart's revision (the redraw request). There is no
//! incremental diffing.
//!
//! - `well_log`: multi-axis line chart of gamma ray, resistivity, porosity
//! - `risk_timeline`: 24-hour line chart of three risk channels
//! - `trajectory`: top-view scatter of planned/actual path and target zone
//! - `gauge`: imperatively drawn risk gauge, rendered to SVG

pub mod gauge;
pub mod risk_timeline;
pub mod trajectory;
pub mod well_log;

pub use gauge::{Canvas, DrawOp, RiskGauge};
pub use risk_timeline::RiskTimelineChart;
pub use trajectory::TrajectoryChart;
pub use well_log::WellLogChart;

use serde::Serialize;

/// Common surface of the data-driven chart adapters.
pub trait ChartAdapter {
    /// Generator output the chart is rebuilt from
    type Source: ?Sized;

    /// Page element the chart is bound to
    fn element_id(&self) -> &'static str;

    /// Whether a chart instance exists (element was present)
    fn is_bound(&self) -> bool;

    /// Rebuild from `source` and request a redraw.
    ///
    /// Returns `false` when nothing was drawn: unbound adapter or empty source.
    fn update(&mut self, source: &Self::Source) -> bool;

    /// Number of redraws so far (0 when unbound)
    fn revision(&self) -> u64;
}

/// Series styling plus data, shaped like a chart library dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset<T> {
    pub label: &'static str,
    pub border_color: &'static str,
    pub background_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    pub show_line: bool,
    pub fill: bool,
    pub data: Vec<T>,
}

impl<T> Dataset<T> {
    pub fn new(
        label: &'static str,
        border_color: &'static str,
        background_color: &'static str,
    ) -> Self {
        Self {
            label,
            border_color,
            background_color,
            y_axis_id: None,
            tension: None,
            show_line: false,
            fill: false,
            data: Vec::new(),
        }
    }

    pub fn on_axis(mut self, axis: &'static str) -> Self {
        self.y_axis_id = Some(axis);
        self
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    pub fn with_line(mut self) -> Self {
        self.show_line = true;
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.data = data;
        self
    }
}

/// Axis description
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub position: &'static str,
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Axis {
    pub fn new(id: &'static str, title: Option<&'static str>, position: &'static str) -> Self {
        Self {
            id,
            title,
            position,
            display: true,
            min: None,
            max: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.display = false;
        self
    }

    pub fn bounded(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Chart instance state: configuration plus the current data
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Chart<L, T> {
    pub element_id: &'static str,
    pub kind: ChartKind,
    pub title: &'static str,
    pub labels: Vec<L>,
    pub datasets: Vec<Dataset<T>>,
    pub axes: Vec<Axis>,
    pub revision: u64,
}

impl<L, T> Chart<L, T> {
    /// Mark the chart as redrawn
    pub fn request_redraw(&mut self) {
        self.revision += 1;
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Scatter,
}
