//! In-process schema registry

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::schema::TableSchema;

use super::ApiState;

#[derive(Debug, Serialize)]
pub struct SchemaStored {
    pub name: String,
    pub fields: usize,
    pub created: bool,
}

/// POST /api/schema/:name - Store a table schema (201 new, 200 replaced)
pub async fn register_schema(
    State(state): State<ApiState>,
    Path(name): Path<String>,
    Json(mut schema): Json<TableSchema>,
) -> Response {
    if name.trim().is_empty() {
        return ApiErrorResponse::bad_request("schema name must not be empty");
    }
    // Path wins over the body's name
    schema.name = name;

    let stored = SchemaStored {
        name: schema.name.clone(),
        fields: schema.fields.len(),
        created: false,
    };
    let created = state.schemas.insert(schema).await;
    info!(schema = %stored.name, fields = stored.fields, created, "Schema registered");

    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    ApiResponse::with_status(status, SchemaStored { created, ..stored })
}

/// GET /api/schema - All registered schemas
pub async fn list_schemas(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(state.schemas.list().await)
}

/// GET /api/schema/:name
pub async fn get_schema(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    match state.schemas.get(&name).await {
        Some(schema) => ApiResponse::ok(schema),
        None => ApiErrorResponse::not_found(format!("schema '{name}' is not registered")),
    }
}
