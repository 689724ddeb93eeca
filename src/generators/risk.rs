//! Drilling risk generator

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::types::risk_bounds::{BLOWOUT, CIRCULATION, EQUIPMENT, WELLBORE};
use crate::types::{RiskLevel, RiskSnapshot};

/// Number of hourly snapshots in the risk window.
pub const RISK_WINDOW_HOURS: usize = 24;

/// Cumulative thresholds for the overall category: 80% LOW, 10% MEDIUM, 10% HIGH.
const LOW_THRESHOLD: f64 = 0.8;
const MEDIUM_THRESHOLD: f64 = 0.9;

/// Map one uniform draw in `[0, 1)` to a risk category.
pub fn classify_overall(u: f64) -> RiskLevel {
    if u < LOW_THRESHOLD {
        RiskLevel::Low
    } else if u < MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

fn channel((min, range): (f64, f64)) -> Uniform<f64> {
    Uniform::new(min, min + range)
}

/// Produce 24 hourly snapshots ending at `now`, oldest first.
pub fn generate_risk_window<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<RiskSnapshot> {
    let equipment = channel(EQUIPMENT);
    let wellbore = channel(WELLBORE);
    let circulation = channel(CIRCULATION);
    let blowout = channel(BLOWOUT);

    let mut window = Vec::with_capacity(RISK_WINDOW_HOURS);
    for hours_ago in 0..RISK_WINDOW_HOURS {
        window.push(RiskSnapshot {
            timestamp: now - Duration::hours(hours_ago as i64),
            overall_risk: classify_overall(rng.gen()),
            equipment_risk: equipment.sample(rng),
            wellbore_risk: wellbore.sample(rng),
            circulation_risk: circulation.sample(rng),
            blowout_risk: blowout.sample(rng),
        });
    }

    // Generated newest-first; the window is kept oldest-first
    window.reverse();
    window
}
