// server/src/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use models::errors::MedTrackError;
use models::users::Role;

/// HTTP-facing error. Everything a handler can fail with maps onto one of
/// these, and each carries the status code the spec's taxonomy assigns.
#[derive(Debug)]
pub enum ApiError {
    /// 422 — form-level failure (password mismatch, duplicate email, ...).
    Validation(String),
    /// 401 — missing/expired session or bad credentials. The message is
    /// always the same generic string; nothing distinguishes an unknown
    /// email from a wrong password.
    Unauthorized,
    /// 403 — authenticated but with the wrong role.
    Forbidden(Role),
    /// 404
    NotFound(String),
    /// 409 — lost conditional write (e.g. appointment already completed).
    Conflict(String),
    /// 503 — backing store unreachable during a write.
    StoreUnavailable(String),
    /// 500
    Internal(String),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ApiError::Forbidden(role) => (
                StatusCode::FORBIDDEN,
                format!("{} access required", role),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::StoreUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("error"),
            "message": message,
        }));
        (status, body).into_response()
    }
}

impl From<MedTrackError> for ApiError {
    fn from(err: MedTrackError) -> Self {
        match err {
            MedTrackError::Validation(v) => ApiError::Validation(v.to_string()),
            MedTrackError::Auth => ApiError::Unauthorized,
            MedTrackError::Forbidden(role) => ApiError::Forbidden(role),
            MedTrackError::NotFound(msg) => ApiError::NotFound(msg),
            MedTrackError::Conflict(msg) => ApiError::Conflict(msg),
            MedTrackError::StoreUnavailable(msg) => ApiError::StoreUnavailable(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
