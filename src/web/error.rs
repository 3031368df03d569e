use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by the HTTP handlers, rendered as `{"error": msg}`.
#[derive(Debug, Error)]
pub enum AppError {
    // 400 Bad Request
    #[error("{0}")]
    BadRequest(String),

    // 500 Internal Server Error
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

/// Bad answers are the caller's fault. Anything else from the library is not.
///
/// `/predict` only yields the first two today; the other variants come from
/// the file front ends and are mapped so that `?` stays total if a handler
/// ever reads one.
impl From<crate::Error> for AppError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::InvalidAnswers { .. } | crate::Error::OutOfRange { .. } => {
                AppError::BadRequest(err.to_string())
            }
            crate::Error::Io(_) | crate::Error::Csv(_) | crate::Error::Json(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
