use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ask::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream AI service error: {0}")]
    Upstream(String),

    #[error("AI service did not answer within {bound_ms} ms")]
    Timeout { bound_ms: u64 },

    #[error("Upstream AI service returned an empty answer")]
    EmptyResponse,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Timeout { .. } | AppError::EmptyResponse => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(_) => self.to_string(),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                self.to_string()
            }
            AppError::Timeout { bound_ms } => {
                tracing::error!("Upstream call timed out after {bound_ms} ms");
                self.to_string()
            }
            AppError::EmptyResponse => {
                tracing::error!("Upstream returned blank text");
                self.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
