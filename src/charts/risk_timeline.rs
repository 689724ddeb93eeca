//! 24-hour risk trend chart

use chrono::Local;

use super::{Axis, Chart, ChartAdapter, ChartKind, Dataset};
use crate::page::{element_ids, Page};
use crate::types::RiskSnapshot;

pub type RiskLineChart = Chart<String, f64>;

/// Equipment, wellbore and circulation risk over the snapshot window
#[derive(Debug, Clone, Default)]
pub struct RiskTimelineChart {
    chart: Option<RiskLineChart>,
}

impl RiskTimelineChart {
    pub fn new(page: &Page) -> Self {
        if !page.has_element(element_ids::RISK_TIMELINE_CHART) {
            return Self::default();
        }

        Self {
            chart: Some(Chart {
                element_id: element_ids::RISK_TIMELINE_CHART,
                kind: ChartKind::Line,
                title: "24-Hour Risk Trend Analysis",
                labels: Vec::new(),
                datasets: vec![
                    Dataset::new("Equipment Risk", "#e53e3e", "rgba(229, 62, 62, 0.1)")
                        .with_tension(0.4),
                    Dataset::new("Wellbore Risk", "#ed8936", "rgba(237, 137, 54, 0.1)")
                        .with_tension(0.4),
                    Dataset::new("Circulation Risk", "#f6ad55", "rgba(246, 173, 85, 0.1)")
                        .with_tension(0.4),
                ],
                axes: vec![
                    Axis::new("x", Some("Time"), "bottom"),
                    Axis::new("y", Some("Risk Level (%)"), "left").bounded(0.0, 100.0),
                ],
                revision: 0,
            }),
        }
    }

    pub fn chart(&self) -> Option<&RiskLineChart> {
        self.chart.as_ref()
    }
}

impl ChartAdapter for RiskTimelineChart {
    type Source = [RiskSnapshot];

    fn element_id(&self) -> &'static str {
        element_ids::RISK_TIMELINE_CHART
    }

    fn is_bound(&self) -> bool {
        self.chart.is_some()
    }

    fn update(&mut self, window: &[RiskSnapshot]) -> bool {
        let Some(chart) = self.chart.as_mut() else {
            return false;
        };
        if window.is_empty() {
            return false;
        }

        chart.labels = window
            .iter()
            .map(|s| s.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string())
            .collect();
        chart.datasets[0].data = window.iter().map(|s| s.equipment_risk).collect();
        chart.datasets[1].data = window.iter().map(|s| s.wellbore_risk).collect();
        chart.datasets[2].data = window.iter().map(|s| s.circulation_risk).collect();
        chart.request_redraw();
        true
    }

    fn revision(&self) -> u64 {
        self.chart.as_ref().map_or(0, |c| c.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkupConfig;
    use crate::generators::generate_risk_window;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_update_plots_three_channels() {
        let mut adapter = RiskTimelineChart::new(&Page::new(&MarkupConfig::default()));
        let mut rng = StdRng::seed_from_u64(5);
        let window = generate_risk_window(&mut rng, Utc::now());

        assert!(adapter.update(&window));
        let chart = adapter.chart().unwrap();
        assert_eq!(chart.labels.len(), 24);
        assert_eq!(chart.datasets.len(), 3);
        assert_eq!(chart.datasets[2].data[23], window[23].circulation_risk);
        assert_eq!(chart.axes[1].max, Some(100.0));
    }
}
