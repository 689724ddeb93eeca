//! Drilling risk snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall risk category of a snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// Percentage bounds for each risk channel, as `(min, range)`.
///
/// A value is drawn from `[min, min + range)`.
pub mod risk_bounds {
    pub const EQUIPMENT: (f64, f64) = (5.0, 25.0);
    pub const WELLBORE: (f64, f64) = (20.0, 40.0);
    pub const CIRCULATION: (f64, f64) = (10.0, 30.0);
    pub const BLOWOUT: (f64, f64) = (2.0, 15.0);
}

/// One hourly risk assessment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskSnapshot {
    pub timestamp: DateTime<Utc>,
    pub overall_risk: RiskLevel,
    /// Equipment failure risk (%)
    pub equipment_risk: f64,
    /// Wellbore instability risk (%)
    pub wellbore_risk: f64,
    /// Lost circulation risk (%)
    pub circulation_risk: f64,
    /// Kick/blowout risk (%)
    pub blowout_risk: f64,
}
