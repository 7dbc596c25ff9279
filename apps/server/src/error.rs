//! API error mapping.
//!
//! Every failure is converted into one human-readable message plus a
//! status code; nothing propagates past the handler boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use summit_ai::AiError;
use summit_core::errors::{DatabaseError, Error as CoreError};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Core(CoreError),
    Ai(AiError),
    Unauthorized(String),
    BadRequest(String),
    Upstream(String),
    Internal(String),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(CoreError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Core(CoreError::Database(DatabaseError::NotFound(_))) => {
                (StatusCode::NOT_FOUND, "Record not found".to_string())
            }
            ApiError::Core(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Ai(AiError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, msg.to_string())
            }
            ApiError::Ai(AiError::MissingApiKey(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "The AI service is not configured. Add an API key to enable the advisor."
                    .to_string(),
            ),
            ApiError::Ai(AiError::Core(err)) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Ai(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("request failed: {}", message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Core(err)
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        ApiError::Ai(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
