//! Well-log line chart

use super::{Axis, Chart, ChartAdapter, ChartKind, Dataset};
use crate::page::{element_ids, Page};
use crate::types::WellLogSample;

pub type WellLogLineChart = Chart<f64, f64>;

/// Gamma ray, resistivity and porosity against depth
#[derive(Debug, Clone, Default)]
pub struct WellLogChart {
    chart: Option<WellLogLineChart>,
}

impl WellLogChart {
    pub fn new(page: &Page) -> Self {
        if !page.has_element(element_ids::WELL_LOG_CHART) {
            return Self::default();
        }

        Self {
            chart: Some(Chart {
                element_id: element_ids::WELL_LOG_CHART,
                kind: ChartKind::Line,
                title: "Well Log Analysis - Multi-Parameter View",
                labels: Vec::new(),
                datasets: vec![
                    Dataset::new("Gamma Ray (API)", "#f6ad55", "rgba(246, 173, 85, 0.1)")
                        .on_axis("y"),
                    Dataset::new("Resistivity (Ω·m)", "#2d5aa0", "rgba(45, 90, 160, 0.1)")
                        .on_axis("y1"),
                    Dataset::new("Porosity (%)", "#38a169", "rgba(56, 161, 105, 0.1)")
                        .on_axis("y2"),
                ],
                axes: vec![
                    Axis::new("x", Some("Depth (ft)"), "bottom"),
                    Axis::new("y", Some("Gamma Ray (API)"), "left"),
                    Axis::new("y1", Some("Resistivity (Ω·m)"), "right"),
                    Axis::new("y2", None, "right").hidden(),
                ],
                revision: 0,
            }),
        }
    }

    pub fn chart(&self) -> Option<&WellLogLineChart> {
        self.chart.as_ref()
    }
}

impl ChartAdapter for WellLogChart {
    type Source = [WellLogSample];

    fn element_id(&self) -> &'static str {
        element_ids::WELL_LOG_CHART
    }

    fn is_bound(&self) -> bool {
        self.chart.is_some()
    }

    fn update(&mut self, samples: &[WellLogSample]) -> bool {
        let Some(chart) = self.chart.as_mut() else {
            return false;
        };
        if samples.is_empty() {
            return false;
        }

        chart.labels = samples.iter().map(|s| s.depth).collect();
        chart.datasets[0].data = samples.iter().map(|s| s.gamma_ray).collect();
        chart.datasets[1].data = samples.iter().map(|s| s.resistivity).collect();
        chart.datasets[2].data = samples.iter().map(|s| s.porosity).collect();
        chart.request_redraw();
        true
    }

    fn revision(&self) -> u64 {
        self.chart.as_ref().map_or(0, |c| c.revision)
    }
}
