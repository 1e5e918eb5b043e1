use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldError {
    /// Path of the offending field; empty when the whole body is at fault
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: &str, kind: &str) -> Self {
        FieldError {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.to_string(),
            kind: kind.to_string(),
        }
    }
}

/// Custom error type for API endpoints
///
/// Every handler returns this on failure, so status codes and JSON error
/// bodies stay consistent across endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed validation
    Validation(Vec<FieldError>),
    /// Path id is not an integer
    InvalidId(String),
    /// No item with this id; holds the id as the client sent it
    NotFound(String),
    /// Anything else; the cause is logged but never returned
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(details) => {
                tracing::warn!("Validation error: {:?}", details);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Invalid data".to_string(),
                        details,
                    },
                )
            }
            ApiError::InvalidId(raw) => {
                tracing::warn!("Invalid id in path: {}", raw);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: format!("Invalid id: expected an integer, got '{}'", raw),
                        details: Vec::new(),
                    },
                )
            }
            ApiError::NotFound(id) => {
                tracing::warn!("Item with id={} not found", id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: format!("Item with id {} not found", id),
                        details: Vec::new(),
                    },
                )
            }
            ApiError::Internal(err) => {
                tracing::error!("Unexpected error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        details: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Validation(vec![FieldError::new(&[], &err.to_string(), "json_invalid")])
    }
}

/// Parse a path segment into an item id
///
/// Integers outside the `i64` range are reported as not found.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ApiError::NotFound(raw.to_string())
        }
        _ => ApiError::InvalidId(raw.to_string()),
    })
}
