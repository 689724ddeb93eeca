//! Current data collections and page state

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use crate::api::envelope::ApiResponse;
use crate::config::defaults;
use crate::generators::well_log::table_sample;
use crate::types::{PlanView, TrajectoryPoint, WellLogSample};

use super::ApiState;

/// GET /api/state - Page snapshot: sections, text nodes, buttons, toasts
pub async fn get_state(State(state): State<ApiState>) -> Response {
    let snapshot = state.dashboard.read().await.snapshot();
    ApiResponse::ok(snapshot)
}

/// GET /api/well-logs - Full sample collection
pub async fn get_well_logs(State(state): State<ApiState>) -> Response {
    let samples = state.dashboard.read().await.well_logs().to_vec();
    ApiResponse::ok(samples)
}

/// GET /api/well-logs/table - The rows shown in the table (every 5th sample)
pub async fn get_well_log_table(State(state): State<ApiState>) -> Response {
    let dashboard = state.dashboard.read().await;
    let rows: Vec<WellLogSample> =
        table_sample(dashboard.well_logs(), defaults::WELL_LOG_TABLE_STRIDE)
            .cloned()
            .collect();
    ApiResponse::ok(rows)
}

/// GET /api/risk - The 24-hour risk window, oldest first
pub async fn get_risk(State(state): State<ApiState>) -> Response {
    let window = state.dashboard.read().await.risk().to_vec();
    ApiResponse::ok(window)
}

#[derive(Debug, Serialize)]
pub struct TrajectoryResponse {
    pub points: Vec<TrajectoryPoint>,
    pub latest: Option<TrajectoryPoint>,
    pub plan_view: PlanView,
}

/// GET /api/trajectory - Walk, latest point and plan view
pub async fn get_trajectory(State(state): State<ApiState>) -> Response {
    let dashboard = state.dashboard.read().await;
    ApiResponse::ok(TrajectoryResponse {
        points: dashboard.trajectory().to_vec(),
        latest: dashboard.trajectory().last().cloned(),
        plan_view: dashboard.plan_view().clone(),
    })
}
