use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fraudlens_core::error::CoreError;
use fraudlens_scoring::error::ScoringError;
use serde::Serialize;

/// Unified API error type for requests that never reach an action.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

/// HTTP status for a failed prediction action.
pub fn scoring_status(err: &ScoringError) -> StatusCode {
    match err {
        ScoringError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ScoringError::MissingFile
        | ScoringError::Core(CoreError::IncompleteTransaction { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ScoringError::Status { .. }
        | ScoringError::Transport(_)
        | ScoringError::Decode(_)
        | ScoringError::Core(_) => StatusCode::BAD_GATEWAY,
        ScoringError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
