//! Rendered page and health

use axum::extract::State;
use axum::response::{Html, Response};
use serde::Serialize;

use crate::api::envelope::ApiResponse;
use crate::navigation::Section;
use crate::page::render;

use super::ApiState;

/// GET / - Server-rendered dashboard
pub async fn index(State(state): State<ApiState>) -> Html<String> {
    let dashboard = state.dashboard.read().await;
    Html(render::page_document(&dashboard).into_string())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub active_section: Section,
}

/// GET /health
pub async fn health(State(state): State<ApiState>) -> Response {
    let active_section = state.dashboard.read().await.navigator().active();
    ApiResponse::ok(HealthResponse {
        status: "ok",
        uptime_secs: state.started_at.elapsed().as_secs(),
        active_section,
    })
}
