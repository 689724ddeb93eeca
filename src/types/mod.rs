//! Shared data structures for the synthetic drilling dashboard
//!
//! This module defines the records the generators produce:
//! - Well logs: FormationBand, WellLogSample
//! - Drilling risk: RiskSnapshot, RiskLevel
//! - Geo-steering: TrajectoryPoint, PlanPoint, SteeringRecommendation
//! - Dashboard cards: DashboardMetrics, FormationConfidence
//!
//! Every collection is regenerated wholesale; nothing here carries an identity
//! beyond its position in a `Vec`.

mod metrics;
mod risk;
mod trajectory;
mod well_log;

pub use metrics::*;
pub use risk::*;
pub use trajectory::*;
pub use well_log::*;
