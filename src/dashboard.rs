//! Dashboard state
//!
//! Owns everything the page shows: the current data collections, the page
//! model, the chart adapters, the navigator and the RNG. Generators stay
//! pure; this module binds their output to the page. One instance is shared
//! between the HTTP handlers, the polling tasks and the action tasks as
//! `Arc<RwLock<Dashboard>>`, and every mutation replaces whole collections
//! under the write lock.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::actions::{AnalysisAction, PendingAction, SceneControl};
use crate::charts::{ChartAdapter, RiskGauge, RiskTimelineChart, TrajectoryChart, WellLogChart};
use crate::config::{defaults, DashboardConfig, TimingConfig};
use crate::format;
use crate::generators::{
    generate_dashboard_metrics, generate_plan_view, generate_risk_window, generate_trajectory,
    generate_well_log, rescore_formations,
};
use crate::navigation::{NavigationError, Navigator, RefreshAction, Section};
use crate::notify::{Notification, Notifier};
use crate::page::{element_ids, render, Page, PageSnapshot};
use crate::scene::Scene3d;
use crate::types::{
    DashboardMetrics, Formation, FormationBand, PlanView, RiskSnapshot, TrajectoryPoint,
    WellLogSample,
};

/// Handle shared across tasks
pub type SharedDashboard = Arc<RwLock<Dashboard>>;

/// Recommendation texts written by a finished route optimization
pub const OPTIMIZED_RECOMMENDATIONS: [&str; 3] = [
    "Optimal trajectory calculated - maintain current direction",
    "Target zone alignment: 97.2% accuracy",
    "Estimated time to target: 18.5 hours",
];

pub struct Dashboard {
    rng: StdRng,
    bands: Vec<FormationBand>,
    formation_items: Vec<Formation>,
    timing: TimingConfig,

    page: Page,
    navigator: Navigator,
    notifier: Notifier,
    scene: Scene3d,

    well_log_chart: WellLogChart,
    risk_timeline_chart: RiskTimelineChart,
    trajectory_chart: TrajectoryChart,
    risk_gauge: RiskGauge,

    well_logs: Vec<WellLogSample>,
    risk: Vec<RiskSnapshot>,
    trajectory: Vec<TrajectoryPoint>,
    plan_view: PlanView,
    metrics: Option<DashboardMetrics>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("active", &self.navigator.active())
            .field("well_logs", &self.well_logs.len())
            .field("risk", &self.risk.len())
            .field("trajectory", &self.trajectory.len())
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Build the page, bind the charts and load the initial data.
    ///
    /// The charts stay empty until their section is first shown; only the
    /// gauge is drawn up front.
    pub fn new(config: &DashboardConfig) -> Self {
        let rng = match config.simulation.seed {
            Some(seed) => {
                info!(seed, "Seeded synthetic data generator");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let markup = &config.markup;
        let mut page = Page::new(markup);
        let navigator = Navigator::new(&markup.sections, markup.active_section);
        let notifier = Notifier::new(
            config.timing.notification_visible(),
            config.timing.notification_exit(),
        );
        let scene = Scene3d::mount(&mut page);

        let well_log_chart = WellLogChart::new(&page);
        let risk_timeline_chart = RiskTimelineChart::new(&page);
        let trajectory_chart = TrajectoryChart::new(&page);
        let mut risk_gauge = RiskGauge::new(&page, markup.gauge_width, markup.gauge_height);
        risk_gauge.draw();

        let mut dashboard = Self {
            rng,
            bands: config.bands.clone(),
            formation_items: markup.formation_items.clone(),
            timing: config.timing.clone(),
            page,
            navigator,
            notifier,
            scene,
            well_log_chart,
            risk_timeline_chart,
            trajectory_chart,
            risk_gauge,
            well_logs: Vec::new(),
            risk: Vec::new(),
            trajectory: Vec::new(),
            plan_view: PlanView::default(),
            metrics: None,
        };
        dashboard.load_demo_data();
        dashboard
    }

    pub fn shared(config: &DashboardConfig) -> SharedDashboard {
        Arc::new(RwLock::new(Self::new(config)))
    }

    fn load_demo_data(&mut self) {
        self.generate_well_logs();
        self.generate_risk();
        self.generate_geosteering();
        self.update_dashboard_metrics();
        self.rescore_formations();
        info!(
            well_logs = self.well_logs.len(),
            risk = self.risk.len(),
            trajectory = self.trajectory.len(),
            "Demo data loaded"
        );
    }

    // ========================================================================
    // Data refresh
    // ========================================================================

    /// Regenerate well logs and re-render the sampled table.
    pub fn generate_well_logs(&mut self) {
        self.well_logs = generate_well_log(&mut self.rng, &self.bands);
        let rows = render::well_log_table_rows(&self.well_logs, defaults::WELL_LOG_TABLE_STRIDE);
        self.page.set_html(element_ids::WELL_LOGS_TABLE_BODY, rows.into_string());
    }

    pub fn generate_risk(&mut self) {
        self.risk = generate_risk_window(&mut self.rng, Utc::now());
    }

    /// Regenerate the trajectory walk and show its last point.
    pub fn generate_geosteering(&mut self) {
        self.trajectory = generate_trajectory(&mut self.rng);
        if let Some(latest) = self.trajectory.last() {
            self.page.set_text(element_ids::CURRENT_DEPTH, format::feet(latest.depth));
            self.page
                .set_text(element_ids::TARGET_DISTANCE, format::feet(latest.target_distance));
            self.page.set_text(element_ids::AZIMUTH, format::degrees(latest.azimuth));
            self.page
                .set_text(element_ids::INCLINATION, format::degrees_1dp(latest.inclination));
        }
    }

    pub fn update_well_log_chart(&mut self) -> bool {
        self.well_log_chart.update(&self.well_logs)
    }

    /// Refresh the timeline from the current risk window.
    ///
    /// The gauge is not redrawn here; only risk analysis redraws it.
    pub fn update_risk_charts(&mut self) -> bool {
        self.risk_timeline_chart.update(&self.risk)
    }

    /// Regenerate the plan view and push it to the trajectory chart.
    pub fn update_trajectory_chart(&mut self) -> bool {
        self.plan_view = generate_plan_view(&mut self.rng);
        self.trajectory_chart.update(&self.plan_view)
    }

    pub fn update_scene(&mut self) {
        self.scene.update();
    }

    pub fn update_dashboard_metrics(&mut self) {
        let metrics = generate_dashboard_metrics(&mut self.rng);
        self.page
            .set_text(element_ids::WELLS_MONITORED, metrics.wells_monitored.to_string());
        self.page.set_text(
            element_ids::PREDICTION_ACCURACY,
            format::percent_1dp(metrics.prediction_accuracy),
        );
        self.page.set_text(
            element_ids::DATA_POINTS_PROCESSED,
            metrics.data_points_processed.to_string(),
        );
        self.metrics = Some(metrics);
    }

    fn rescore_formations(&mut self) {
        let scores = rescore_formations(&mut self.rng, &self.formation_items);
        self.page.set_formation_panel(scores);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Switch sections and apply the refreshes the target asks for.
    pub fn show_section(&mut self, section: Section) -> Result<(), NavigationError> {
        let actions = self.navigator.show(section)?;
        for action in actions {
            match action {
                RefreshAction::WellLogChart => {
                    self.update_well_log_chart();
                }
                RefreshAction::RiskCharts => {
                    self.update_risk_charts();
                }
                RefreshAction::Scene3d => self.update_scene(),
                RefreshAction::TrajectoryChart => {
                    self.update_trajectory_chart();
                }
            }
        }
        debug!(section = %section, refreshes = actions.len(), "Section shown");
        Ok(())
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Put the action's button into its busy state.
    ///
    /// The label captured for restoring is whatever the button shows now,
    /// which is the busy label if a previous run is still pending.
    pub fn begin_action(&mut self, action: AnalysisAction) -> PendingAction {
        let restore_label = match self.page.button_mut(action) {
            Some(button) => {
                let busy = action.busy_label().to_string();
                let previous = std::mem::replace(&mut button.label, busy);
                button.disabled = true;
                previous
            }
            None => action.busy_label().to_string(),
        };
        PendingAction {
            restore_label,
            delay: action.delay(&self.timing),
        }
    }

    /// Apply the action's result, toast, and restore its button.
    pub fn complete_action(&mut self, action: AnalysisAction, restore_label: &str) {
        match action {
            AnalysisAction::WellLogAnalysis => {
                self.rescore_formations();
            }
            AnalysisAction::RiskAnalysis => {
                self.generate_risk();
                self.update_risk_charts();
                self.risk_gauge.draw();
            }
            AnalysisAction::RouteOptimization => {
                self.generate_geosteering();
                self.update_trajectory_chart();
                self.page.overwrite_recommendations(&OPTIMIZED_RECOMMENDATIONS);
            }
        }
        self.notifier.success(action.completion_message());

        if let Some(button) = self.page.button_mut(action) {
            button.label = restore_label.to_string();
            button.disabled = false;
        }
        info!(action = %action, "Simulated analysis complete");
    }

    pub fn scene_control(&mut self, control: SceneControl) {
        match control {
            SceneControl::ResetView => self.scene.reset_view(),
            SceneControl::ToggleWireframe => self.scene.toggle_wireframe(),
            SceneControl::ShowTargetZone => self.scene.show_target_zone(),
        }
        self.notifier.info(control.message());
    }

    // ========================================================================
    // Polling
    // ========================================================================

    /// Well-log tick: regenerate and redraw only while the section is shown.
    pub fn poll_well_logs(&mut self) -> bool {
        if !self.navigator.is_active(Section::WellLogs) {
            return false;
        }
        self.generate_well_logs();
        self.update_well_log_chart();
        true
    }

    /// Risk tick: regenerate and redraw only while the section is shown.
    pub fn poll_risk(&mut self) -> bool {
        if !self.navigator.is_active(Section::DrillingRisk) {
            return false;
        }
        self.generate_risk();
        self.update_risk_charts();
        true
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn scene(&self) -> &Scene3d {
        &self.scene
    }

    pub fn well_log_chart(&self) -> &WellLogChart {
        &self.well_log_chart
    }

    pub fn risk_timeline_chart(&self) -> &RiskTimelineChart {
        &self.risk_timeline_chart
    }

    pub fn trajectory_chart(&self) -> &TrajectoryChart {
        &self.trajectory_chart
    }

    pub fn risk_gauge(&self) -> &RiskGauge {
        &self.risk_gauge
    }

    pub fn well_logs(&self) -> &[WellLogSample] {
        &self.well_logs
    }

    pub fn risk(&self) -> &[RiskSnapshot] {
        &self.risk
    }

    pub fn trajectory(&self) -> &[TrajectoryPoint] {
        &self.trajectory
    }

    pub fn plan_view(&self) -> &PlanView {
        &self.plan_view
    }

    pub fn metrics(&self) -> Option<&DashboardMetrics> {
        self.metrics.as_ref()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            active_section: self.navigator.active(),
            sections: self
                .navigator
                .visibility()
                .map(|(section, active)| SectionState { section, active })
                .collect(),
            page: self.page.snapshot(),
            scene: self.scene.clone(),
            charts: ChartRevisions {
                well_log: self.well_log_chart.revision(),
                risk_timeline: self.risk_timeline_chart.revision(),
                trajectory: self.trajectory_chart.revision(),
                risk_gauge: self.risk_gauge.draws(),
            },
            notifications: self.notifier.active(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionState {
    pub section: Section,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartRevisions {
    pub well_log: u64,
    pub risk_timeline: u64,
    pub trajectory: u64,
    pub risk_gauge: u64,
}

/// Serializable view of the whole page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub active_section: Section,
    pub sections: Vec<SectionState>,
    pub page: PageSnapshot,
    pub scene: Scene3d,
    pub charts: ChartRevisions,
    pub notifications: Vec<Notification>,
}
