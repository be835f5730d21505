use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::controller;
use crate::error::ApiError;
use crate::routes::ActionResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub question: String,
}

/// Ask the AI about the current results.
pub async fn ask(
    State(state): State<AppState>,
    body: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<ActionResponse, ApiError> {
    let Json(req) = body?;
    let empty_question = req.question.is_empty();

    let (report, failure) = controller::ask_question(&state, req.question).await?;

    let status = match failure {
        None => StatusCode::OK,
        Some(_) if empty_question => StatusCode::UNPROCESSABLE_ENTITY,
        Some(_) => StatusCode::BAD_GATEWAY,
    };

    Ok(ActionResponse { status, report })
}
