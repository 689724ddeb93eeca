//! Dashboard card values and formation confidence scores

use serde::{Deserialize, Serialize};

use super::Formation;

/// Values shown on the overview metric cards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub wells_monitored: u32,
    /// Prediction accuracy (%)
    pub prediction_accuracy: f64,
    pub data_points_processed: u32,
}

/// Confidence score for one item of the formation analysis panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FormationConfidence {
    pub formation: Formation,
    /// Raw score (%), also used as the bar width
    pub confidence: f64,
}
