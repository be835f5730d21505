//! Dashboard controller.
//!
//! Runs one user action end to end: apply the start event, perform the
//! network call with the lock released, apply the outcome, and execute the
//! effects the reducer asks for. Summary fetches are returned as
//! [`SummaryJob`]s so the caller decides whether to spawn or await them.

use fraudlens_core::correlation::sample_matrix;
use fraudlens_core::dashboard::{DashboardEvent, DashboardSnapshot, Effect, RunKind, Ticket};
use fraudlens_core::insights::{self, InsightError};
use fraudlens_core::models::feature::FeatureImportance;
use fraudlens_core::models::notice::Notice;
use fraudlens_core::models::prediction::PredictionResult;
use fraudlens_core::models::transaction::Transaction;
use fraudlens_core::patterns::today_utc;
use fraudlens_scoring::batch_predict_fraud;
use fraudlens_scoring::error::ScoringError;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// What an action did: the dashboard after it, the toasts it raised, and
/// the failure message if it failed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReport {
    pub snapshot: DashboardSnapshot,
    pub notices: Vec<Notice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pending summary fetch for a completed run.
#[derive(Debug)]
pub struct SummaryJob {
    ticket: Ticket,
    results: Vec<PredictionResult>,
}

impl SummaryJob {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Fetch the summary and apply it. Failures degrade to the placeholder
    /// inside the reducer.
    pub async fn run(self, state: AppState) {
        let outcome = insights::get_summary(state.insights.as_ref(), &self.results).await;

        let effects = state
            .dashboard
            .lock()
            .await
            .apply(DashboardEvent::SummaryResolved {
                ticket: self.ticket,
                outcome,
            });

        for notice in collect_notices(&effects) {
            warn!(title = %notice.title, description = %notice.description, "summary notice");
        }
    }
}

/// Spawn a summary job on the runtime.
pub fn spawn_summary(state: &AppState, job: SummaryJob) {
    let state = state.clone();
    tokio::spawn(job.run(state));
}

fn collect_notices(effects: &[Effect]) -> Vec<Notice> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Notify(n) => Some(n.clone()),
            _ => None,
        })
        .collect()
}

fn summary_job(effects: Vec<Effect>) -> Option<SummaryJob> {
    effects.into_iter().find_map(|e| match e {
        Effect::Summarize { ticket, results } => Some(SummaryJob { ticket, results }),
        _ => None,
    })
}

async fn start_run(state: &AppState, kind: RunKind) -> Result<Ticket, ApiError> {
    let effects = state
        .dashboard
        .lock()
        .await
        .apply(DashboardEvent::RunStarted { kind });

    effects
        .into_iter()
        .find_map(|e| match e {
            Effect::Dispatch(ticket) => Some(ticket),
            _ => None,
        })
        .ok_or_else(|| ApiError::Internal("run start produced no ticket".to_string()))
}

/// Apply a finished prediction round trip and report on it.
async fn finish_run(
    state: &AppState,
    ticket: Ticket,
    outcome: Result<(Vec<PredictionResult>, Vec<FeatureImportance>), ScoringError>,
) -> RunOutcome {
    let correlation = sample_matrix(&mut rand::thread_rng());
    let (event, failure) = match outcome {
        Ok((results, feature_importance)) => (
            DashboardEvent::RunSucceeded {
                ticket,
                results,
                feature_importance,
                today: today_utc(),
                correlation,
            },
            None,
        ),
        Err(e) => (
            DashboardEvent::RunFailed {
                ticket,
                error: e.to_string(),
            },
            Some(e),
        ),
    };

    let mut dashboard = state.dashboard.lock().await;
    let effects = dashboard.apply(event);
    let notices = collect_notices(&effects);
    let report = ActionReport {
        snapshot: dashboard.snapshot(),
        notices,
        error: failure.as_ref().map(ToString::to_string),
    };
    drop(dashboard);

    RunOutcome {
        report,
        summary: summary_job(effects),
        failure,
    }
}

/// Outcome of a prediction action.
pub struct RunOutcome {
    pub report: ActionReport,
    pub summary: Option<SummaryJob>,
    pub failure: Option<ScoringError>,
}

/// Score one transaction and merge it into the dashboard.
pub async fn submit_single(
    state: &AppState,
    transaction: Transaction,
) -> Result<RunOutcome, ApiError> {
    let ticket = start_run(state, RunKind::Single).await?;
    info!(generation = ticket.generation, "single prediction started");

    let outcome = state
        .predictor
        .predict_fraud(transaction)
        .await
        .map(|p| (vec![p.result], p.feature_importance));

    Ok(finish_run(state, ticket, outcome).await)
}

/// Run a (synthetic) batch and replace the dashboard results with it.
pub async fn submit_batch(state: &AppState, file_name: &str) -> Result<RunOutcome, ApiError> {
    let ticket = start_run(state, RunKind::Batch).await?;
    info!(generation = ticket.generation, file_name, "batch prediction started");

    let outcome = batch_predict_fraud(file_name, state.batch_delay)
        .await
        .map(|b| (b.results, b.feature_importance));

    Ok(finish_run(state, ticket, outcome).await)
}

/// Ask the AI a question about the current results and append the
/// exchange to the transcript.
pub async fn ask_question(
    state: &AppState,
    question: String,
) -> Result<(ActionReport, Option<InsightError>), ApiError> {
    let effects = state
        .dashboard
        .lock()
        .await
        .apply(DashboardEvent::QuestionAsked { question });

    let (epoch, question, results) = effects
        .into_iter()
        .find_map(|e| match e {
            Effect::Answer {
                epoch,
                question,
                results,
            } => Some((epoch, question, results)),
            _ => None,
        })
        .ok_or_else(|| ApiError::Internal("question produced no answer request".to_string()))?;

    let outcome = insights::get_answer(state.insights.as_ref(), &question, &results).await;
    let failure = outcome.as_ref().err().cloned();

    let mut dashboard = state.dashboard.lock().await;
    let effects = dashboard.apply(DashboardEvent::AnswerResolved { epoch, outcome });
    let report = ActionReport {
        snapshot: dashboard.snapshot(),
        notices: collect_notices(&effects),
        error: failure.as_ref().map(ToString::to_string),
    };

    Ok((report, failure))
}

/// Current dashboard snapshot.
pub async fn snapshot(state: &AppState) -> DashboardSnapshot {
    state.dashboard.lock().await.snapshot()
}
