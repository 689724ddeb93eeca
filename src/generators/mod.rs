//! Synthetic data generators
//!
//! Pure functions from an injected RNG (and fixed or configured ranges) to
//! fresh collections. None of them touch the page; the dashboard binds their
//! output to text nodes, tables and charts.
//!
//! - `well_log`: one sample per depth step per formation band
//! - `risk`: 24 hourly risk snapshots ending now
//! - `trajectory`: 50-step random walk plus the top-view plan
//! - `metrics`: overview cards and formation confidence rescoring

pub mod metrics;
pub mod risk;
pub mod trajectory;
pub mod well_log;

pub use metrics::{generate_dashboard_metrics, rescore_formations};
pub use risk::generate_risk_window;
pub use trajectory::{generate_plan_view, generate_trajectory, target_zone};
pub use well_log::generate_well_log;

use rand::Rng;

use crate::types::MeasurementRange;

/// Uniform draw from `[min, max)`; a degenerate range yields `min`.
pub(crate) fn draw<R: Rng + ?Sized>(rng: &mut R, range: &MeasurementRange) -> f64 {
    range.min + rng.gen::<f64>() * range.span()
}
