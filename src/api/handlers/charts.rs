//! Chart instances

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::api::envelope::{ApiErrorResponse, ApiResponse};

use super::ApiState;

/// GET /api/charts/:name - Chart model, 404 when the chart's element is absent
pub async fn get_chart(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    let dashboard = state.dashboard.read().await;
    let unbound =
        || ApiErrorResponse::not_found(format!("chart '{name}' is not present on the page"));

    match name.as_str() {
        "well-log" => dashboard
            .well_log_chart()
            .chart()
            .map_or_else(unbound, ApiResponse::ok),
        "risk-timeline" => dashboard
            .risk_timeline_chart()
            .chart()
            .map_or_else(unbound, ApiResponse::ok),
        "trajectory" => dashboard
            .trajectory_chart()
            .chart()
            .map_or_else(unbound, ApiResponse::ok),
        _ => ApiErrorResponse::not_found(format!("unknown chart '{name}'")),
    }
}

/// GET /api/charts/risk-gauge.svg
pub async fn get_risk_gauge_svg(State(state): State<ApiState>) -> Response {
    match state.dashboard.read().await.risk_gauge().to_svg() {
        Some(svg) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
        }
        None => ApiErrorResponse::not_found("risk gauge is not present on the page"),
    }
}
