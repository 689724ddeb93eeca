//! Trajectory top-view scatter chart

use super::{Axis, Chart, ChartAdapter, ChartKind, Dataset};
use crate::generators::target_zone;
use crate::page::{element_ids, Page};
use crate::types::{PlanPoint, PlanView};

pub type TrajectoryScatterChart = Chart<String, PlanPoint>;

/// Planned vs actual path (north vs east) with the fixed target zone
#[derive(Debug, Clone, Default)]
pub struct TrajectoryChart {
    chart: Option<TrajectoryScatterChart>,
}

impl TrajectoryChart {
    pub fn new(page: &Page) -> Self {
        if !page.has_element(element_ids::TRAJECTORY_CHART) {
            return Self::default();
        }

        Self {
            chart: Some(Chart {
                element_id: element_ids::TRAJECTORY_CHART,
                kind: ChartKind::Scatter,
                title: "Well Trajectory - Top View (North vs East)",
                labels: Vec::new(),
                datasets: vec![
                    Dataset::new("Planned Trajectory", "#2d5aa0", "rgba(45, 90, 160, 0.6)")
                        .with_line()
                        .with_tension(0.4),
                    Dataset::new("Actual Trajectory", "#38a169", "rgba(56, 161, 105, 0.6)")
                        .with_line()
                        .with_tension(0.4),
                    Dataset::new("Target Zone", "#f6ad55", "rgba(246, 173, 85, 0.3)")
                        .with_line()
                        .filled()
                        .with_data(target_zone()),
                ],
                axes: vec![
                    Axis::new("x", Some("East (ft)"), "bottom"),
                    Axis::new("y", Some("North (ft)"), "left"),
                ],
                revision: 0,
            }),
        }
    }

    pub fn chart(&self) -> Option<&TrajectoryScatterChart> {
        self.chart.as_ref()
    }
}

impl ChartAdapter for TrajectoryChart {
    type Source = PlanView;

    fn element_id(&self) -> &'static str {
        element_ids::TRAJECTORY_CHART
    }

    fn is_bound(&self) -> bool {
        self.chart.is_some()
    }

    fn update(&mut self, view: &PlanView) -> bool {
        let Some(chart) = self.chart.as_mut() else {
            return false;
        };
        if view.planned.is_empty() && view.actual.is_empty() {
            return false;
        }

        chart.datasets[0].data = view.planned.clone();
        chart.datasets[1].data = view.actual.clone();
        chart.request_redraw();
        true
    }

    fn revision(&self) -> u64 {
        self.chart.as_ref().map_or(0, |c| c.revision)
    }
}
