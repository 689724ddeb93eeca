//! Simulated analysis actions
//!
//! Each action disables its button, shows a busy label, sleeps for a fixed
//! delay and then mutates the dashboard as if an analysis had finished. No
//! work happens during the delay.
//!
//! Overlap is not prevented: triggering an action while a previous run is
//! still sleeping schedules a second, independent completion. The second run
//! captures the busy label as the label to restore, so after both complete
//! the button is enabled but still reads "Analyzing...".

use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::info;

use crate::config::TimingConfig;
use crate::dashboard::SharedDashboard;

/// The three delayed "AI" actions
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisAction {
    WellLogAnalysis,
    RiskAnalysis,
    #[serde(rename = "optimize-route")]
    RouteOptimization,
}

impl AnalysisAction {
    pub const ALL: [AnalysisAction; 3] = [
        AnalysisAction::WellLogAnalysis,
        AnalysisAction::RiskAnalysis,
        AnalysisAction::RouteOptimization,
    ];

    /// URL path segment
    pub fn slug(&self) -> &'static str {
        match self {
            AnalysisAction::WellLogAnalysis => "well-log-analysis",
            AnalysisAction::RiskAnalysis => "risk-analysis",
            AnalysisAction::RouteOptimization => "optimize-route",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            AnalysisAction::WellLogAnalysis | AnalysisAction::RiskAnalysis => "Analyzing...",
            AnalysisAction::RouteOptimization => "Optimizing...",
        }
    }

    pub fn delay(&self, timing: &TimingConfig) -> Duration {
        Duration::from_millis(match self {
            AnalysisAction::WellLogAnalysis => timing.well_log_analysis_ms,
            AnalysisAction::RiskAnalysis => timing.risk_analysis_ms,
            AnalysisAction::RouteOptimization => timing.route_optimization_ms,
        })
    }

    /// Success toast shown on completion
    pub fn completion_message(&self) -> &'static str {
        match self {
            AnalysisAction::WellLogAnalysis => "AI Well Log Analysis Complete",
            AnalysisAction::RiskAnalysis => "Risk Analysis Updated",
            AnalysisAction::RouteOptimization => "Route Optimization Complete",
        }
    }
}

impl std::fmt::Display for AnalysisAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown action: {0}")]
pub struct ParseActionError(pub String);

impl FromStr for AnalysisAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisAction::ALL
            .into_iter()
            .find(|a| a.slug() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

/// Immediate 3D view controls (no delay)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SceneControl {
    ResetView,
    #[serde(rename = "wireframe")]
    ToggleWireframe,
    #[serde(rename = "target-zone")]
    ShowTargetZone,
}

impl SceneControl {
    pub const ALL: [SceneControl; 3] = [
        SceneControl::ResetView,
        SceneControl::ToggleWireframe,
        SceneControl::ShowTargetZone,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            SceneControl::ResetView => "reset-view",
            SceneControl::ToggleWireframe => "wireframe",
            SceneControl::ShowTargetZone => "target-zone",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SceneControl::ResetView => "View Reset",
            SceneControl::ToggleWireframe => "Wireframe Mode Toggled",
            SceneControl::ShowTargetZone => "Target Zone Highlighted",
        }
    }
}

impl FromStr for SceneControl {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneControl::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

/// What `Dashboard::begin_action` hands back to the scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    /// Label captured before the busy label was shown
    pub restore_label: String,
    pub delay: Duration,
}

/// A scheduled completion.
///
/// Dropping the handle does not cancel the run; `abort()` does.
#[derive(Debug)]
pub struct ActionHandle {
    action: AnalysisAction,
    task: JoinHandle<()>,
}

impl ActionHandle {
    pub fn action(&self) -> AnalysisAction {
        self.action
    }

    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the completion to run
    pub async fn join(self) -> Result<(), JoinError> {
        self.task.await
    }
}

/// Start `action`: show the busy state now, complete after its delay.
pub async fn trigger(dashboard: &SharedDashboard, action: AnalysisAction) -> ActionHandle {
    let pending = dashboard.write().await.begin_action(action);
    info!(
        action = %action,
        delay_ms = pending.delay.as_millis() as u64,
        "Simulated analysis started"
    );

    let shared = dashboard.clone();
    let task = tokio::spawn(async move {
        tokio::time::sleep(pending.delay).await;
        shared
            .write()
            .await
            .complete_action(action, &pending.restore_label);
    });

    ActionHandle { action, task }
}
