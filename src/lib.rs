//! AI PetroTech Platform: synthetic drilling dashboard engine
//!
//! A headless rendition of a drilling demo dashboard. It generates synthetic
//! well-log, risk and trajectory data, binds it to an in-process page model
//! (text nodes, tables, buttons, charts, toasts) and runs the demo's timers
//! and simulated "AI" actions on tokio.
//!
//! ## Architecture
//!
//! - **Generators**: pure functions of an injected RNG
//! - **Page / Charts**: the DOM stand-in and the chart models bound to it
//! - **Dashboard**: owns all state, shared as `Arc<RwLock<Dashboard>>`
//! - **Actions / Polling / Notify**: delayed completions, fixed-interval
//!   refreshes and timed toasts
//! - **Schema**: fire-and-forget table schema registration
//! - **API**: axum router driving the dashboard over HTTP

pub mod actions;
pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod generators;
pub mod navigation;
pub mod notify;
pub mod page;
pub mod polling;
pub mod scene;
pub mod schema;
pub mod types;

// Re-export configuration
pub use config::DashboardConfig;

// Re-export commonly used types
pub use types::{
    DashboardMetrics, Formation, FormationBand, FormationConfidence, PlanPoint, PlanView,
    RiskLevel, RiskSnapshot, SteeringRecommendation, TrajectoryPoint, WellLogSample,
};

// Re-export the dashboard surface
pub use actions::{trigger, ActionHandle, AnalysisAction, SceneControl};
pub use dashboard::{Dashboard, DashboardSnapshot, SharedDashboard};
pub use navigation::{NavigationError, Navigator, Section};
pub use notify::{NotificationKind, Notifier};
pub use polling::{spawn_polling, PollingTasks};
pub use schema::{HttpSchemaSink, SchemaError, SchemaRegistry, SchemaSink, TableSchema};
