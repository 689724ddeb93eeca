//! System-wide default constants.
//!
//! Centralises the fixed numbers of the demo. Grouped by subsystem for easy
//! discovery; config fields default to these values.

// ============================================================================
// Server
// ============================================================================

/// HTTP server bind address.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";

// ============================================================================
// Well Logs
// ============================================================================

/// Depth increment between consecutive well-log samples (ft).
pub const WELL_LOG_STEP_FT: f64 = 10.0;

/// Upper bound on samples generated for one formation band.
pub const MAX_SAMPLES_PER_BAND: usize = 100_000;

/// Only every Nth sample is rendered into the well-log table.
pub const WELL_LOG_TABLE_STRIDE: usize = 5;

// ============================================================================
// Polling Loop
// ============================================================================

/// Overview metric card refresh period (seconds).
pub const METRICS_INTERVAL_SECS: u64 = 30;

/// Well-log regeneration period while the well-logs section is active (seconds).
pub const WELL_LOG_POLL_INTERVAL_SECS: u64 = 120;

/// Risk regeneration period while the drilling-risk section is active (seconds).
pub const RISK_POLL_INTERVAL_SECS: u64 = 60;

// ============================================================================
// Simulated Analysis
// ============================================================================

/// Simulated latency of the well-log analysis action (ms).
pub const WELL_LOG_ANALYSIS_DELAY_MS: u64 = 2_000;

/// Simulated latency of the risk analysis action (ms).
pub const RISK_ANALYSIS_DELAY_MS: u64 = 1_500;

/// Simulated latency of the route optimization action (ms).
pub const ROUTE_OPTIMIZATION_DELAY_MS: u64 = 1_800;

// ============================================================================
// Notifications
// ============================================================================

/// How long a toast stays fully visible (ms).
pub const NOTIFICATION_VISIBLE_MS: u64 = 3_000;

/// Duration of the slide-out phase before a toast is removed (ms).
pub const NOTIFICATION_EXIT_MS: u64 = 300;

// ============================================================================
// Schema Registration
// ============================================================================

/// HTTP client timeout for schema registration requests (seconds).
pub const SCHEMA_HTTP_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Risk Gauge
// ============================================================================

/// Risk gauge canvas width (px). Matches the HTML canvas default.
pub const GAUGE_CANVAS_WIDTH: f64 = 300.0;

/// Risk gauge canvas height (px). Matches the HTML canvas default.
pub const GAUGE_CANVAS_HEIGHT: f64 = 150.0;
