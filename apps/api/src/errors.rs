use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::schema::FieldErrors;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every JSON body carries `success: false` plus a message; validation errors
/// additionally carry an `errors` object keyed by field. Internal errors log
/// their detail server-side and return a generic message to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    Validation(FieldErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Validation error",
                    "errors": errors,
                })),
            )
                .into_response(),
            AppError::BadRequest(msg) => {
                error_body(StatusCode::BAD_REQUEST, &msg).into_response()
            }
            AppError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, &msg).into_response(),
            AppError::Unauthorized => {
                error_body(StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred",
                )
                .into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred",
                )
                .into_response()
            }
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        status,
        Json(json!({
            "success": false,
            "message": message,
        })),
    )
}
