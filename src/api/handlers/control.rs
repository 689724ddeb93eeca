//! Navigation, simulated actions, 3D controls and toasts

use axum::extract::{Path, State};
use axum::response::Response;
use serde::Serialize;
use tracing::info;

use crate::actions::{self, AnalysisAction, SceneControl};
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::navigation::Section;
use crate::page::Button;
use crate::scene::Scene3d;

use super::ApiState;

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub active_section: Section,
    pub title: &'static str,
}

/// POST /api/sections/:section - Show a section and apply its refreshes
///
/// Unknown section names are 404; known sections missing from the markup are 400.
pub async fn show_section(State(state): State<ApiState>, Path(section): Path<String>) -> Response {
    let section = match section.parse::<Section>() {
        Ok(s) => s,
        Err(e) => return ApiErrorResponse::not_found(e.to_string()),
    };

    let mut dashboard = state.dashboard.write().await;
    match dashboard.show_section(section) {
        Ok(()) => ApiResponse::ok(SectionResponse {
            active_section: section,
            title: section.title(),
        }),
        Err(e) => ApiErrorResponse::bad_request(e.to_string()),
    }
}

// ============================================================================
// Simulated Actions
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ActionAccepted {
    pub action: AnalysisAction,
    pub delay_ms: u64,
    pub button: Option<Button>,
}

/// POST /api/actions/:action - Start a simulated analysis (202)
pub async fn trigger_action(State(state): State<ApiState>, Path(action): Path<String>) -> Response {
    let action = match action.parse::<AnalysisAction>() {
        Ok(a) => a,
        Err(e) => return ApiErrorResponse::not_found(e.to_string()),
    };

    // Completion runs detached; the handle is not kept
    let handle = actions::trigger(&state.dashboard, action).await;

    let dashboard = state.dashboard.read().await;
    let delay = action.delay(dashboard.timing());
    ApiResponse::accepted(ActionAccepted {
        action: handle.action(),
        delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        button: dashboard.page().button(action).cloned(),
    })
}

/// POST /api/scene/:control - Reset view, toggle wireframe, highlight target
pub async fn scene_control(State(state): State<ApiState>, Path(control): Path<String>) -> Response {
    let control = match control.parse::<SceneControl>() {
        Ok(c) => c,
        Err(e) => return ApiErrorResponse::not_found(e.to_string()),
    };

    let mut dashboard = state.dashboard.write().await;
    dashboard.scene_control(control);
    info!(control = control.slug(), "3D control applied");
    let scene: Scene3d = dashboard.scene().clone();
    ApiResponse::ok(scene)
}

// ============================================================================
// Notifications
// ============================================================================

/// GET /api/notifications - Toasts currently on screen
pub async fn get_notifications(State(state): State<ApiState>) -> Response {
    let toasts = state.dashboard.read().await.notifier().active();
    ApiResponse::ok(toasts)
}
