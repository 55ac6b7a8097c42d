//! HTTP mapping of proxy errors

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::core::errors::ProxyError;

/// Error body, `{"detail": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Message string, or a structured payload for upstream rejections
    pub detail: Value,
}

impl ErrorResponse {
    /// Wrap `detail` as an error body
    pub fn new(detail: impl Into<Value>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Map a malformed request body to `{"detail": ...}`, keeping axum's status
/// (400 bad JSON, 415 wrong content type, 422 missing or mistyped field).
pub fn rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    tracing::debug!("Rejected translate body ({}): {}", status, rejection.body_text());
    (status, Json(ErrorResponse::new(rejection.body_text()))).into_response()
}

impl ProxyError {
    /// Caller-facing status; rejected requests keep the provider's status
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::UpstreamRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::UpstreamProtocolError(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            ProxyError::UpstreamRejected { body, .. } => json!({ "upstream": body }),
            other => Value::String(other.to_string()),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
