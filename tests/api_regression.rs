//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! every endpoint using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port.

use petrotech_demo::api::{create_app, ApiState};
use petrotech_demo::config::DashboardConfig;
use petrotech_demo::navigation::Section;
use petrotech_demo::{Dashboard, SchemaRegistry};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

fn create_test_state() -> ApiState {
    let mut config = DashboardConfig::default();
    config.simulation.seed = Some(2024);
    ApiState::new(Dashboard::shared(&config), SchemaRegistry::new())
}

async fn send(state: &ApiState, method: &str, uri: &str, body: Body) -> Response {
    create_app(state.clone())
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json(resp: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// All GET endpoints should return 200.
#[tokio::test]
async fn test_get_endpoints_return_200() {
    let state = create_test_state();
    // Bind the chart instances first so their endpoints have data
    for section in ["well-logs", "drilling-risk", "geo-steering"] {
        let resp = send(&state, "POST", &format!("/api/sections/{section}"), Body::empty()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let endpoints = [
        "/",
        "/health",
        "/api/state",
        "/api/well-logs",
        "/api/well-logs/table",
        "/api/risk",
        "/api/trajectory",
        "/api/charts/well-log",
        "/api/charts/risk-timeline",
        "/api/charts/trajectory",
        "/api/charts/risk-gauge.svg",
        "/api/notifications",
        "/api/schema",
    ];

    for endpoint in &endpoints {
        let resp = send(&state, "GET", endpoint, Body::empty()).await;
        assert_eq!(
            resp.status(),
            StatusCode::OK,
            "GET {endpoint} returned status {}",
            resp.status()
        );
    }
}

#[tokio::test]
async fn test_health_envelope() {
    let state = create_test_state();
    let v = json(send(&state, "GET", "/health", Body::empty()).await).await;

    assert_eq!(v["data"]["status"], "ok");
    assert_eq!(v["data"]["active_section"], "dashboard");
    assert!(v["meta"]["timestamp"].is_string());
}

#[tokio::test]
async fn test_index_renders_html() {
    let state = create_test_state();
    let resp = send(&state, "GET", "/", Body::empty()).await;
    assert!(resp.headers()["content-type"].to_str().unwrap().starts_with("text/html"));

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"id="wellLogsTableBody""#));
    assert!(html.contains("Full 3D rendering available in production version"));
}

#[tokio::test]
async fn test_well_log_table_is_every_fifth_sample() {
    let state = create_test_state();
    let all = json(send(&state, "GET", "/api/well-logs", Body::empty()).await).await;
    let table = json(send(&state, "GET", "/api/well-logs/table", Body::empty()).await).await;

    assert_eq!(all["data"].as_array().unwrap().len(), 50);
    let rows = table["data"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[1]["depth"], all["data"][5]["depth"]);
}

#[tokio::test]
async fn test_risk_window_has_24_snapshots() {
    let state = create_test_state();
    let v = json(send(&state, "GET", "/api/risk", Body::empty()).await).await;
    let window = v["data"].as_array().unwrap();

    assert_eq!(window.len(), 24);
    for snap in window {
        let level = snap["overall_risk"].as_str().unwrap();
        assert!(["LOW", "MEDIUM", "HIGH"].contains(&level));
    }
}

#[tokio::test]
async fn test_charts_absent_before_navigation_are_empty() {
    let state = create_test_state();
    let v = json(send(&state, "GET", "/api/charts/well-log", Body::empty()).await).await;

    assert_eq!(v["data"]["revision"], 0);
    assert!(v["data"]["labels"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_chart_is_404() {
    let state = create_test_state();
    let resp = send(&state, "GET", "/api/charts/pie", Body::empty()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json(resp).await["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_chart_404_when_element_missing() {
    let mut config = DashboardConfig::default();
    config.markup.elements.retain(|id| id != "trajectoryChart");
    let state = ApiState::new(Dashboard::shared(&config), SchemaRegistry::new());

    let resp = send(&state, "GET", "/api/charts/trajectory", Body::empty()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_navigation_status_codes() {
    let mut config = DashboardConfig::default();
    config.markup.sections = vec![Section::Dashboard, Section::DrillingRisk];
    let state = ApiState::new(Dashboard::shared(&config), SchemaRegistry::new());

    let ok = send(&state, "POST", "/api/sections/drilling-risk", Body::empty()).await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(json(ok).await["data"]["active_section"], "drilling-risk");

    let unknown = send(&state, "POST", "/api/sections/reports", Body::empty()).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let missing = send(&state, "POST", "/api/sections/geo-steering", Body::empty()).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let v = json(send(&state, "GET", "/api/state", Body::empty()).await).await;
    assert_eq!(v["data"]["active_section"], "drilling-risk");
    assert_eq!(v["data"]["charts"]["risk_timeline"], 1);
}

#[tokio::test]
async fn test_actions_return_202_and_busy_button() {
    let state = create_test_state();

    for (slug, busy) in [
        ("well-log-analysis", "Analyzing..."),
        ("risk-analysis", "Analyzing..."),
        ("optimize-route", "Optimizing..."),
    ] {
        let resp = send(&state, "POST", &format!("/api/actions/{slug}"), Body::empty()).await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED, "POST {slug}");

        let v = json(resp).await;
        assert_eq!(v["data"]["action"], slug);
        assert_eq!(v["data"]["button"]["label"], busy);
        assert_eq!(v["data"]["button"]["disabled"], true);
    }

    let resp = send(&state, "POST", "/api/actions/analyze", Body::empty()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_scene_controls_emit_info_toasts() {
    let state = create_test_state();

    let v = json(send(&state, "POST", "/api/scene/wireframe", Body::empty()).await).await;
    assert_eq!(v["data"]["wireframe"], true);
    send(&state, "POST", "/api/scene/reset-view", Body::empty()).await;

    let v = json(send(&state, "GET", "/api/notifications", Body::empty()).await).await;
    let toasts = v["data"].as_array().unwrap();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0]["message"], "Wireframe Mode Toggled");
    assert_eq!(toasts[1]["kind"], "info");
    assert_eq!(toasts[1]["icon"], "info-circle");
}

#[tokio::test]
async fn test_schema_registry_roundtrip() {
    let state = create_test_state();
    let body = serde_json::json!({
        "name": "well_logs",
        "fields": [
            { "name": "id", "type": "text", "description": "Unique identifier" },
            { "name": "depth", "type": "number", "description": "Depth in feet" }
        ]
    });

    let first = send(&state, "POST", "/api/schema/well_logs", Body::from(body.to_string())).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let again = send(&state, "POST", "/api/schema/well_logs", Body::from(body.to_string())).await;
    assert_eq!(again.status(), StatusCode::OK);
    assert_eq!(json(again).await["data"]["created"], false);

    let v = json(send(&state, "GET", "/api/schema/well_logs", Body::empty()).await).await;
    assert_eq!(v["data"]["fields"][1]["type"], "number");

    let missing = send(&state, "GET", "/api/schema/geosteering_data", Body::empty()).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
