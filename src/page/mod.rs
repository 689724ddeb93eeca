//! Page model
//!
//! In-process stand-in for the browser DOM surface the dashboard writes into:
//! text nodes, HTML containers, action buttons, the formation confidence
//! panel and the geo-steering recommendation lines. The markup config decides
//! which element IDs exist; writes to an absent element are dropped.

pub mod render;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::actions::AnalysisAction;
use crate::config::MarkupConfig;
use crate::format;
use crate::types::FormationConfidence;

/// Element IDs the dashboard knows how to fill
pub mod element_ids {
    pub const WELL_LOG_CHART: &str = "wellLogChart";
    pub const RISK_GAUGE: &str = "riskGauge";
    pub const RISK_TIMELINE_CHART: &str = "riskTimelineChart";
    pub const TRAJECTORY_CHART: &str = "trajectoryChart";
    pub const WELL_LOGS_TABLE_BODY: &str = "wellLogsTableBody";
    pub const SCENE_CONTAINER: &str = "threejs-container";
    pub const CURRENT_DEPTH: &str = "currentDepth";
    pub const TARGET_DISTANCE: &str = "targetDistance";
    pub const AZIMUTH: &str = "azimuth";
    pub const INCLINATION: &str = "inclination";
    pub const WELLS_MONITORED: &str = "wellsMonitored";
    pub const PREDICTION_ACCURACY: &str = "predictionAccuracy";
    pub const DATA_POINTS_PROCESSED: &str = "dataPointsProcessed";

    pub const ALL: [&str; 13] = [
        WELL_LOG_CHART,
        RISK_GAUGE,
        RISK_TIMELINE_CHART,
        TRAJECTORY_CHART,
        WELL_LOGS_TABLE_BODY,
        SCENE_CONTAINER,
        CURRENT_DEPTH,
        TARGET_DISTANCE,
        AZIMUTH,
        INCLINATION,
        WELLS_MONITORED,
        PREDICTION_ACCURACY,
        DATA_POINTS_PROCESSED,
    ];
}

/// Visible state of an action button
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub disabled: bool,
}

/// One line of the formation analysis panel as displayed
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormationItem {
    pub formation: String,
    /// Bar width (%)
    pub bar_width: f64,
    pub label: String,
}

/// Mutable page surface
#[derive(Debug, Clone)]
pub struct Page {
    elements: BTreeSet<String>,
    text: BTreeMap<String, String>,
    html: BTreeMap<String, String>,
    buttons: BTreeMap<AnalysisAction, Button>,
    formation_panel: Vec<FormationConfidence>,
    recommendations: Vec<String>,
}

impl Page {
    pub fn new(markup: &MarkupConfig) -> Self {
        let buttons = AnalysisAction::ALL
            .into_iter()
            .map(|action| {
                let label = match action {
                    AnalysisAction::WellLogAnalysis => &markup.buttons.well_log_analysis,
                    AnalysisAction::RiskAnalysis => &markup.buttons.risk_analysis,
                    AnalysisAction::RouteOptimization => &markup.buttons.optimize_route,
                };
                (
                    action,
                    Button {
                        label: label.clone(),
                        disabled: false,
                    },
                )
            })
            .collect();

        Self {
            elements: markup.elements.iter().cloned().collect(),
            text: BTreeMap::new(),
            html: BTreeMap::new(),
            buttons,
            formation_panel: Vec::new(),
            recommendations: markup.recommendations.clone(),
        }
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    /// Set an element's text content. Returns `false` if the element is absent.
    pub fn set_text(&mut self, id: &str, value: impl Into<String>) -> bool {
        if !self.has_element(id) {
            return false;
        }
        self.text.insert(id.to_string(), value.into());
        true
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.text.get(id).map(String::as_str)
    }

    /// Replace an element's inner HTML. Returns `false` if the element is absent.
    pub fn set_html(&mut self, id: &str, markup: impl Into<String>) -> bool {
        if !self.has_element(id) {
            return false;
        }
        self.html.insert(id.to_string(), markup.into());
        true
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.html.get(id).map(String::as_str)
    }

    pub fn button(&self, action: AnalysisAction) -> Option<&Button> {
        self.buttons.get(&action)
    }

    pub fn button_mut(&mut self, action: AnalysisAction) -> Option<&mut Button> {
        self.buttons.get_mut(&action)
    }

    pub fn set_formation_panel(&mut self, scores: Vec<FormationConfidence>) {
        self.formation_panel = scores;
    }

    pub fn formation_items(&self) -> Vec<FormationItem> {
        self.formation_panel
            .iter()
            .map(|score| FormationItem {
                formation: score.formation.to_string(),
                bar_width: score.confidence,
                label: format::confidence_label(score.confidence),
            })
            .collect()
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Overwrite recommendation lines by position; extra texts are dropped.
    pub fn overwrite_recommendations(&mut self, texts: &[&str]) {
        for (slot, text) in self.recommendations.iter_mut().zip(texts) {
            *slot = (*text).to_string();
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            text: self.text.clone(),
            buttons: self
                .buttons
                .iter()
                .map(|(action, button)| (action.slug().to_string(), button.clone()))
                .collect(),
            formation_items: self.formation_items(),
            recommendations: self.recommendations.clone(),
        }
    }
}

/// Serializable view of the page's text-bearing state
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub text: BTreeMap<String, String>,
    pub buttons: BTreeMap<String, Button>,
    pub formation_items: Vec<FormationItem>,
    pub recommendations: Vec<String>,
}
