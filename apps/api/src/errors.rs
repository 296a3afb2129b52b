#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::GenerationError;
use crate::resume::SectionError;
use crate::users::UserError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<SectionError> for AppError {
    fn from(err: SectionError) -> Self {
        match err {
            SectionError::Validation(msg) => AppError::Validation(msg),
            SectionError::Generation(e) => AppError::Generation(e),
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(msg) => AppError::Validation(msg),
            UserError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, cause) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            // Generation failures are reported as client errors with the backend's cause.
            AppError::Generation(e) => {
                tracing::warn!("Generation error: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "GENERATION_ERROR",
                    "Could not generate section.".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        (status, Json(error_body(code, message, cause))).into_response()
    }
}

fn error_body(code: &str, message: String, cause: Option<String>) -> Value {
    let mut error = json!({
        "code": code,
        "message": message,
    });
    if let Some(cause) = cause {
        error["cause"] = Value::String(cause);
    }
    json!({ "error": error })
}
