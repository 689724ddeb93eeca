//! Geo-steering types: trajectory walk and plan-view points

use serde::{Deserialize, Serialize};

/// Steering advice attached to each trajectory step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SteeringRecommendation {
    MaintainTrajectory,
    AdjustAzimuth,
    IncreaseInclination,
    ReduceDrillingSpeed,
    MonitorFormation,
}

impl SteeringRecommendation {
    pub const ALL: [SteeringRecommendation; 5] = [
        SteeringRecommendation::MaintainTrajectory,
        SteeringRecommendation::AdjustAzimuth,
        SteeringRecommendation::IncreaseInclination,
        SteeringRecommendation::ReduceDrillingSpeed,
        SteeringRecommendation::MonitorFormation,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            SteeringRecommendation::MaintainTrajectory => "Maintain current trajectory",
            SteeringRecommendation::AdjustAzimuth => "Adjust azimuth by +3°",
            SteeringRecommendation::IncreaseInclination => "Increase inclination by 2°",
            SteeringRecommendation::ReduceDrillingSpeed => "Reduce drilling speed",
            SteeringRecommendation::MonitorFormation => "Monitor formation changes",
        }
    }
}

impl std::fmt::Display for SteeringRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// One step of the synthetic well path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryPoint {
    /// Measured depth (ft)
    pub depth: f64,
    /// Azimuth (degrees)
    pub azimuth: f64,
    /// Inclination (degrees), clamped to `[0, 30]`
    pub inclination: f64,
    /// Distance to the target zone (ft), never negative
    pub target_distance: f64,
    pub recommendation: SteeringRecommendation,
}

/// Top-view point: `x` is east (ft), `y` is north (ft)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Planned and actual paths for the trajectory chart
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanView {
    pub planned: Vec<PlanPoint>,
    pub actual: Vec<PlanPoint>,
}
