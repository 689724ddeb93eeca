//! API route handlers
//!
//! - Page and health: the rendered document and liveness
//! - Data: current generator output and the page snapshot
//! - Charts: chart instances and the gauge SVG
//! - Control: navigation, simulated actions, 3D controls, toasts
//! - Schema: the in-process schema registry

mod charts;
mod control;
mod data;
mod page;
mod schema;

pub use charts::*;
pub use control::*;
pub use data::*;
pub use page::*;
pub use schema::*;

use std::time::Instant;

use crate::dashboard::SharedDashboard;
use crate::schema::SchemaRegistry;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub dashboard: SharedDashboard,
    pub schemas: SchemaRegistry,
    /// Process start, for the health endpoint
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(dashboard: SharedDashboard, schemas: SchemaRegistry) -> Self {
        Self {
            dashboard,
            schemas,
            started_at: Instant::now(),
        }
    }
}
