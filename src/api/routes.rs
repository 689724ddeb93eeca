//! API route definitions
//!
//! - `/health`, `/` at the root
//! - `/api/...` for data, charts, navigation, actions and schemas

use axum::{routing::{get, post}, Router};

use super::handlers::{self, ApiState};

/// Routes nested under `/api`
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        // Data
        .route("/well-logs", get(handlers::get_well_logs))
        .route("/well-logs/table", get(handlers::get_well_log_table))
        .route("/risk", get(handlers::get_risk))
        .route("/trajectory", get(handlers::get_trajectory))
        // Charts (static SVG route takes priority over the parameter)
        .route("/charts/risk-gauge.svg", get(handlers::get_risk_gauge_svg))
        .route("/charts/:name", get(handlers::get_chart))
        // Control
        .route("/sections/:section", post(handlers::show_section))
        .route("/actions/:action", post(handlers::trigger_action))
        .route("/scene/:control", post(handlers::scene_control))
        .route("/notifications", get(handlers::get_notifications))
        // Schema registry
        .route("/schema", get(handlers::list_schemas))
        .route("/schema/:name", post(handlers::register_schema).get(handlers::get_schema))
        .with_state(state)
}

/// Page and health at the root
pub fn root_routes(state: ApiState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .with_state(state)
}
