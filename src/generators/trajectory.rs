//! Geo-steering generators: trajectory walk and top-view plan

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{PlanPoint, PlanView, SteeringRecommendation, TrajectoryPoint};

// ============================================================================
// Trajectory Walk
// ============================================================================

/// Number of steps in the trajectory walk.
pub const TRAJECTORY_STEPS: usize = 50;

const START_DEPTH_FT: f64 = 2000.0;
const START_AZIMUTH_DEG: f64 = 45.0;
const START_INCLINATION_DEG: f64 = 0.0;

/// Emitted inclination is clamped to `[0, MAX_INCLINATION_DEG]`.
pub const MAX_INCLINATION_DEG: f64 = 30.0;

/// Depth advances `DEPTH_STEP_MIN_FT + U[0, DEPTH_STEP_JITTER_FT)` per step.
const DEPTH_STEP_MIN_FT: f64 = 20.0;
const DEPTH_STEP_JITTER_FT: f64 = 10.0;

/// Full width of the symmetric azimuth perturbation (±2.5°).
const AZIMUTH_JITTER_DEG: f64 = 5.0;
/// Full width of the symmetric inclination perturbation (±1°).
const INCLINATION_JITTER_DEG: f64 = 2.0;

const TARGET_START_FT: f64 = 2000.0;
const TARGET_CLOSURE_PER_STEP_FT: f64 = 40.0;
const TARGET_NOISE_FT: f64 = 100.0;

/// Run the 50-step walk from the fixed seed position.
///
/// The running inclination is not clamped; only the emitted value is.
pub fn generate_trajectory<R: Rng + ?Sized>(rng: &mut R) -> Vec<TrajectoryPoint> {
    let mut depth = START_DEPTH_FT;
    let mut azimuth = START_AZIMUTH_DEG;
    let mut inclination = START_INCLINATION_DEG;
    let mut points = Vec::with_capacity(TRAJECTORY_STEPS);

    for i in 0..TRAJECTORY_STEPS {
        depth += DEPTH_STEP_MIN_FT + rng.gen::<f64>() * DEPTH_STEP_JITTER_FT;
        azimuth += (rng.gen::<f64>() - 0.5) * AZIMUTH_JITTER_DEG;
        inclination += (rng.gen::<f64>() - 0.5) * INCLINATION_JITTER_DEG;

        let target_distance = TARGET_START_FT - i as f64 * TARGET_CLOSURE_PER_STEP_FT
            + rng.gen::<f64>() * TARGET_NOISE_FT;

        points.push(TrajectoryPoint {
            depth,
            azimuth,
            inclination: inclination.clamp(0.0, MAX_INCLINATION_DEG),
            target_distance: target_distance.max(0.0),
            recommendation: pick_recommendation(rng),
        });
    }

    points
}

/// One of the five steering recommendations, uniformly.
pub fn pick_recommendation<R: Rng + ?Sized>(rng: &mut R) -> SteeringRecommendation {
    SteeringRecommendation::ALL
        .choose(rng)
        .copied()
        .unwrap_or(SteeringRecommendation::MaintainTrajectory)
}

// ============================================================================
// Plan View
// ============================================================================

/// Points on the planned and actual paths.
pub const PLAN_POINTS: usize = 20;

const PLAN_EAST_STEP_FT: f64 = 80.0;
const PLAN_EAST_JITTER_FT: f64 = 20.0;
const PLAN_NORTH_ORIGIN_FT: f64 = 2800.0;
const PLAN_NORTH_STEP_FT: f64 = 15.0;
const PLAN_NORTH_JITTER_FT: f64 = 30.0;
/// Full width of the actual-vs-planned deviation (±20 ft per axis).
const ACTUAL_DEVIATION_FT: f64 = 40.0;

/// Planned path plus an actual path scattered around it.
pub fn generate_plan_view<R: Rng + ?Sized>(rng: &mut R) -> PlanView {
    let mut view = PlanView {
        planned: Vec::with_capacity(PLAN_POINTS),
        actual: Vec::with_capacity(PLAN_POINTS),
    };

    for i in 0..PLAN_POINTS {
        let step = i as f64;
        let east = step * PLAN_EAST_STEP_FT + rng.gen::<f64>() * PLAN_EAST_JITTER_FT;
        let north = PLAN_NORTH_ORIGIN_FT
            + step * PLAN_NORTH_STEP_FT
            + rng.gen::<f64>() * PLAN_NORTH_JITTER_FT;
        view.planned.push(PlanPoint::new(east, north));

        let actual_east = east + (rng.gen::<f64>() - 0.5) * ACTUAL_DEVIATION_FT;
        let actual_north = north + (rng.gen::<f64>() - 0.5) * ACTUAL_DEVIATION_FT;
        view.actual.push(PlanPoint::new(actual_east, actual_north));
    }

    view
}

/// Fixed target-zone polygon drawn on the trajectory chart.
pub fn target_zone() -> Vec<PlanPoint> {
    vec![
        PlanPoint::new(1000.0, 3000.0),
        PlanPoint::new(1200.0, 3200.0),
        PlanPoint::new(1400.0, 3100.0),
        PlanPoint::new(1600.0, 3300.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_walk_is_monotonic_and_clamped() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = generate_trajectory(&mut rng);
            assert_eq!(points.len(), TRAJECTORY_STEPS);

            let mut last_depth = START_DEPTH_FT;
            for p in &points {
                let step = p.depth - last_depth;
                assert!(step > 19.999 && step < 30.001, "step {step}");
                assert!((0.0..=MAX_INCLINATION_DEG).contains(&p.inclination));
                assert!(p.target_distance >= 0.0);
                last_depth = p.depth;
            }
        }
    }

    #[test]
    fn test_target_distance_closes_in() {
        let mut rng = StdRng::seed_from_u64(4);
        let points = generate_trajectory(&mut rng);
        assert!(points[0].target_distance >= 2000.0);
        // 2000 - 49*40 + noise < 140
        assert!(points[49].target_distance < 140.0);
    }

    #[test]
    fn test_azimuth_drift_bounded() {
        let mut rng = StdRng::seed_from_u64(8);
        let points = generate_trajectory(&mut rng);
        let mut prev = START_AZIMUTH_DEG;
        for p in &points {
            assert!((p.azimuth - prev).abs() <= 2.5 + 1e-9);
            prev = p.azimuth;
        }
    }

    #[test]
    fn test_plan_view_shape() {
        let mut rng = StdRng::seed_from_u64(12);
        let view = generate_plan_view(&mut rng);
        assert_eq!(view.planned.len(), PLAN_POINTS);
        assert_eq!(view.actual.len(), PLAN_POINTS);
        for (planned, actual) in view.planned.iter().zip(&view.actual) {
            assert!((planned.x - actual.x).abs() <= 20.0 + 1e-9);
            assert!((planned.y - actual.y).abs() <= 20.0 + 1e-9);
        }
        assert_eq!(target_zone().len(), 4);
    }
}
