//! `{data, meta}` wrapper for dashboard JSON
//!
//! Handlers return either [`ApiResponse`] or [`ApiErrorResponse`]. Both carry
//! the same `meta` block so a client can tell which build produced a payload
//! and when.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    /// Serialized as RFC 3339
    pub timestamp: DateTime<Utc>,
    /// Crate version of the serving dashboard
    pub version: &'static str,
}

impl ResponseMeta {
    fn now() -> Self {
        Self {
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

fn respond<B: Serialize>(status: StatusCode, body: B) -> Response {
    (status, Json(body)).into_response()
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_status(status: StatusCode, data: T) -> Response {
        respond(
            status,
            Self {
                data,
                meta: ResponseMeta::now(),
            },
        )
    }

    pub fn ok(data: T) -> Response {
        Self::with_status(StatusCode::OK, data)
    }

    /// Simulated action scheduled; its effect lands after the delay
    pub fn accepted(data: T) -> Response {
        Self::with_status(StatusCode::ACCEPTED, data)
    }
}

/// Machine-readable failure class
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown section, chart, action or schema
    NotFound,
    /// Request names something the page cannot show
    BadRequest,
}

impl ErrorCode {
    fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ErrorDetail,
    pub meta: ResponseMeta,
}

impl ApiErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Response {
        respond(
            code.status(),
            Self {
                error: ErrorDetail {
                    code,
                    message: message.into(),
                },
                meta: ResponseMeta::now(),
            },
        )
    }

    pub fn not_found(message: impl Into<String>) -> Response {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Response {
        Self::new(ErrorCode::BadRequest, message)
    }
}
