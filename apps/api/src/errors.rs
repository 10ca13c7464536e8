use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The model reply could not be parsed or did not match the expected
    /// shape. Carries the parse diagnostic and the original reply text.
    #[error("Response format error: {message}")]
    ResponseFormat { message: String, raw: String },

    /// The external service rejected the call due to rate/quota limits.
    /// Never retried here — the caller decides when to try again.
    #[error("Upstream quota exceeded")]
    QuotaExceeded,

    /// Any other failure from the external model call.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Quota { .. } => AppError::QuotaExceeded,
            LlmError::Malformed { message, raw } => AppError::ResponseFormat { message, raw },
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ResponseFormat { message, raw } => {
                tracing::error!("Malformed model reply: {message}; raw text: {raw}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RESPONSE_FORMAT",
                    "The AI reply could not be processed".to_string(),
                )
            }
            AppError::QuotaExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                "QUOTA_EXCEEDED",
                "AI service quota exhausted — retry later".to_string(),
            ),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream AI error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The AI service could not be reached".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
