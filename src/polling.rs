//! Fixed-interval refresh timers
//!
//! Three independent loops run for the life of the process:
//! - dashboard metric cards, every 30 s
//! - well logs, every 120 s, only while `well-logs` is shown
//! - risk window, every 60 s, only while `drilling-risk` is shown
//!
//! The first tick comes one full period after start. No backoff, no jitter.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::TimingConfig;
use crate::dashboard::{Dashboard, SharedDashboard};

/// Handles to the running timers. Dropping this does not stop them.
#[derive(Debug)]
pub struct PollingTasks {
    pub metrics: JoinHandle<()>,
    pub well_logs: JoinHandle<()>,
    pub risk: JoinHandle<()>,
}

impl PollingTasks {
    pub fn abort(&self) {
        self.metrics.abort();
        self.well_logs.abort();
        self.risk.abort();
    }
}

/// Spawn the three timers on the current runtime.
pub fn spawn_polling(dashboard: &SharedDashboard, timing: &TimingConfig) -> PollingTasks {
    info!(
        metrics_secs = timing.metrics_interval_secs,
        well_log_secs = timing.well_log_interval_secs,
        risk_secs = timing.risk_interval_secs,
        "Polling timers started"
    );

    PollingTasks {
        metrics: spawn_timer(dashboard.clone(), timing.metrics_interval(), "metrics", |d| {
            d.update_dashboard_metrics();
            true
        }),
        well_logs: spawn_timer(
            dashboard.clone(),
            timing.well_log_interval(),
            "well_logs",
            Dashboard::poll_well_logs,
        ),
        risk: spawn_timer(dashboard.clone(), timing.risk_interval(), "risk", Dashboard::poll_risk),
    }
}

fn spawn_timer<F>(
    dashboard: SharedDashboard,
    period: Duration,
    name: &'static str,
    tick: F,
) -> JoinHandle<()>
where
    F: Fn(&mut Dashboard) -> bool + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            // Lock before calling so no borrow of `tick` spans the await
            let mut guard = dashboard.write().await;
            let refreshed = tick(&mut *guard);
            drop(guard);
            debug!(timer = name, refreshed, "Polling tick");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartAdapter;
    use crate::config::DashboardConfig;
    use crate::navigation::Section;
    use crate::page::element_ids;

    fn setup() -> (SharedDashboard, TimingConfig) {
        let mut config = DashboardConfig::default();
        config.simulation.seed = Some(5);
        (Dashboard::shared(&config), config.timing)
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (dashboard, timing) = setup();
        dashboard.write().await.show_section(Section::WellLogs).unwrap();
        let tasks = spawn_polling(&dashboard, &timing);

        tokio::time::sleep(Duration::from_secs(119)).await;
        assert_eq!(dashboard.read().await.well_log_chart().revision(), 1);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(dashboard.read().await.well_log_chart().revision(), 2);

        tasks.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_risk_timer_skips_hidden_section() {
        let (dashboard, timing) = setup();
        let tasks = spawn_polling(&dashboard, &timing);

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(dashboard.read().await.risk_timeline_chart().revision(), 0);

        dashboard.write().await.show_section(Section::DrillingRisk).unwrap();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(dashboard.read().await.risk_timeline_chart().revision(), 2);

        tasks.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_metrics_refresh_regardless_of_section() {
        let (dashboard, timing) = setup();
        let before = dashboard.read().await.metrics().copied();
        let tasks = spawn_polling(&dashboard, &timing);

        tokio::time::sleep(Duration::from_secs(31)).await;
        let d = dashboard.read().await;
        assert!(d.page().text(element_ids::WELLS_MONITORED).is_some());
        assert_ne!(d.metrics().copied(), before);

        drop(d);
        tasks.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_accepts_send_only_closure() {
        use std::cell::Cell;

        let (dashboard, _) = setup();
        // Cell is Send but not Sync
        let ticks = Cell::new(0u32);
        let handle = spawn_timer(dashboard.clone(), Duration::from_secs(1), "count", move |d| {
            ticks.set(ticks.get() + 1);
            d.notifier().info(format!("tick {}", ticks.get()));
            true
        });

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        let messages: Vec<_> = dashboard
            .read()
            .await
            .notifier()
            .active()
            .into_iter()
            .map(|t| t.message)
            .collect();
        assert_eq!(messages, ["tick 1", "tick 2"]);

        handle.abort();
    }
}
