//! Dashboard Flow Tests
//!
//! End-to-end scenarios over the shared dashboard with paused tokio time:
//! navigation, overlapping simulated actions, polling and toast expiry.

use std::time::Duration;

use petrotech_demo::charts::ChartAdapter;
use petrotech_demo::config::DashboardConfig;
use petrotech_demo::notify::ToastPhase;
use petrotech_demo::page::element_ids;
use petrotech_demo::{spawn_polling, trigger, AnalysisAction, Dashboard, Section, SharedDashboard};

fn shared(seed: u64) -> (SharedDashboard, DashboardConfig) {
    let mut config = DashboardConfig::default();
    config.simulation.seed = Some(seed);
    (Dashboard::shared(&config), config)
}

#[tokio::test(start_paused = true)]
async fn risk_analysis_twice_schedules_two_completions() {
    let (dashboard, _) = shared(7);
    dashboard.write().await.show_section(Section::DrillingRisk).unwrap();

    let first = trigger(&dashboard, AnalysisAction::RiskAnalysis).await;
    tokio::time::sleep(Duration::from_millis(200)).await;
    let second = trigger(&dashboard, AnalysisAction::RiskAnalysis).await;

    first.join().await.unwrap();
    second.join().await.unwrap();

    let d = dashboard.read().await;
    // One refresh from navigation plus one per completion
    assert_eq!(d.risk_timeline_chart().revision(), 3);
    let button = d.page().button(AnalysisAction::RiskAnalysis).unwrap();
    assert!(!button.disabled);
    assert_eq!(button.label, "Analyzing...");

    let done: Vec<_> = d
        .notifier()
        .active()
        .into_iter()
        .filter(|t| t.message == "Risk Analysis Updated")
        .collect();
    assert_eq!(done.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn well_log_analysis_rescores_formation_panel() {
    let (dashboard, _) = shared(8);
    let before = dashboard.read().await.page().formation_items();

    trigger(&dashboard, AnalysisAction::WellLogAnalysis)
        .await
        .join()
        .await
        .unwrap();

    let d = dashboard.read().await;
    let after = d.page().formation_items();
    assert_eq!(after.len(), before.len());
    assert_ne!(after, before);
    for item in &after {
        assert!((85.0..97.0).contains(&item.bar_width));
        assert!(item.label.ends_with("% confidence"));
    }
    assert_eq!(
        d.page().button(AnalysisAction::WellLogAnalysis).unwrap().label,
        "Run AI Analysis"
    );
}

#[tokio::test(start_paused = true)]
async fn route_optimization_rewrites_navigation_panel() {
    let (dashboard, _) = shared(9);
    let walk_before = dashboard.read().await.trajectory().to_vec();

    trigger(&dashboard, AnalysisAction::RouteOptimization)
        .await
        .join()
        .await
        .unwrap();

    let d = dashboard.read().await;
    assert_ne!(d.trajectory(), walk_before.as_slice());
    let latest = d.trajectory().last().unwrap();
    assert_eq!(
        d.page().text(element_ids::CURRENT_DEPTH),
        Some(format!("{} ft", latest.depth.round()).as_str())
    );
    assert_eq!(
        d.page().recommendations(),
        &[
            "Optimal trajectory calculated - maintain current direction".to_string(),
            "Target zone alignment: 97.2% accuracy".to_string(),
            "Estimated time to target: 18.5 hours".to_string(),
        ]
    );
    assert_eq!(d.trajectory_chart().revision(), 1);
}

#[tokio::test(start_paused = true)]
async fn completion_toast_leaves_then_disappears() {
    let (dashboard, _) = shared(10);
    trigger(&dashboard, AnalysisAction::RiskAnalysis)
        .await
        .join()
        .await
        .unwrap();

    let toasts = dashboard.read().await.notifier().active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].phase, ToastPhase::Visible);

    tokio::time::sleep(Duration::from_millis(3_050)).await;
    assert_eq!(dashboard.read().await.notifier().active()[0].phase, ToastPhase::Leaving);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(dashboard.read().await.notifier().active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn polling_follows_active_section() {
    let (dashboard, config) = shared(12);
    let tasks = spawn_polling(&dashboard, &config.timing);

    // Dashboard section: only metric cards refresh
    tokio::time::sleep(Duration::from_secs(125)).await;
    {
        let d = dashboard.read().await;
        assert_eq!(d.well_log_chart().revision(), 0);
        assert_eq!(d.risk_timeline_chart().revision(), 0);
    }

    dashboard.write().await.show_section(Section::WellLogs).unwrap();
    // Next well-log tick is at 240 s
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(dashboard.read().await.well_log_chart().revision(), 2);

    tasks.abort();
}
