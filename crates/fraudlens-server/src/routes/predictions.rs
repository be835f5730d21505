use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use fraudlens_core::models::transaction::Transaction;
use serde::Deserialize;

use crate::controller::{self, RunOutcome};
use crate::error::{ApiError, scoring_status};
use crate::routes::ActionResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    /// Name of the uploaded CSV. The contents are not sent.
    #[serde(default)]
    pub file_name: String,
}

fn respond(state: &AppState, outcome: RunOutcome) -> ActionResponse {
    if let Some(job) = outcome.summary {
        controller::spawn_summary(state, job);
    }

    let status = outcome
        .failure
        .as_ref()
        .map(scoring_status)
        .unwrap_or(StatusCode::OK);

    ActionResponse {
        status,
        report: outcome.report,
    }
}

/// Score one transaction.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Transaction>, JsonRejection>,
) -> Result<ActionResponse, ApiError> {
    let Json(transaction) = body?;
    let outcome = controller::submit_single(&state, transaction).await?;
    Ok(respond(&state, outcome))
}

/// Run a batch upload.
pub async fn predict_batch(
    State(state): State<AppState>,
    body: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<ActionResponse, ApiError> {
    let Json(req) = body?;
    let outcome = controller::submit_batch(&state, &req.file_name).await?;
    Ok(respond(&state, outcome))
}
