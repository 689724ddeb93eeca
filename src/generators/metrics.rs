//! Overview card values and formation confidence rescoring

use rand::Rng;

use crate::types::{DashboardMetrics, Formation, FormationConfidence};

/// Fresh values for the overview metric cards.
pub fn generate_dashboard_metrics<R: Rng + ?Sized>(rng: &mut R) -> DashboardMetrics {
    DashboardMetrics {
        wells_monitored: (120.0 + rng.gen::<f64>() * 20.0).floor() as u32,
        prediction_accuracy: 95.0 + rng.gen::<f64>() * 4.0,
        data_points_processed: (1200.0 + rng.gen::<f64>() * 100.0).floor() as u32,
    }
}

/// New confidence for every formation item, each in `[85, 97)`.
pub fn rescore_formations<R: Rng + ?Sized>(
    rng: &mut R,
    items: &[Formation],
) -> Vec<FormationConfidence> {
    items
        .iter()
        .map(|formation| FormationConfidence {
            formation: *formation,
            confidence: 85.0 + rng.gen::<f64>() * 12.0,
        })
        .collect()
}
