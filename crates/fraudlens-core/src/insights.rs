//! Delegation to the AI collaborator that writes summaries and answers
//! questions about the current results.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::prediction::PredictionResult;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Answer returned instead of calling the collaborator when nothing has
/// been scored yet.
pub const NO_DATA_ANSWER: &str = "I can't answer questions until some transaction data is available. Please run a prediction first.";

/// Error surfaced by the collaborator or by the delegation wrappers. The
/// message is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InsightError(pub String);

impl InsightError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// An external generative-AI collaborator.
///
/// Methods return boxed futures for dyn compatibility.
pub trait InsightSource: Send + Sync {
    /// Free-text summary of a result set.
    fn summarize<'a>(
        &'a self,
        results: &'a [PredictionResult],
    ) -> BoxFuture<'a, Result<String, InsightError>>;

    /// Free-text answer to `question` about a result set.
    fn ask<'a>(
        &'a self,
        question: &'a str,
        results: &'a [PredictionResult],
    ) -> BoxFuture<'a, Result<String, InsightError>>;
}

/// Collaborator used when no model is configured. Every call fails, which
/// the dashboard turns into its placeholder text.
#[derive(Debug, Clone, Default)]
pub struct DisabledInsights;

impl InsightSource for DisabledInsights {
    fn summarize<'a>(
        &'a self,
        _results: &'a [PredictionResult],
    ) -> BoxFuture<'a, Result<String, InsightError>> {
        Box::pin(async { Err(InsightError::new("AI insights are not configured.")) })
    }

    fn ask<'a>(
        &'a self,
        _question: &'a str,
        _results: &'a [PredictionResult],
    ) -> BoxFuture<'a, Result<String, InsightError>> {
        Box::pin(async { Err(InsightError::new("AI insights are not configured.")) })
    }
}

/// Ask the collaborator for a summary of `results`.
pub async fn get_summary(
    source: &dyn InsightSource,
    results: &[PredictionResult],
) -> Result<String, InsightError> {
    match source.summarize(results).await {
        Ok(summary) => {
            info!(results = results.len(), "summary generated");
            Ok(summary)
        }
        Err(e) => {
            warn!(error = %e, "summary generation failed");
            Err(InsightError::new("Failed to generate summary."))
        }
    }
}

/// Ask the collaborator a question about `results`.
///
/// With no results the fixed [`NO_DATA_ANSWER`] is returned without calling
/// the collaborator. An empty question is rejected.
pub async fn get_answer(
    source: &dyn InsightSource,
    question: &str,
    results: &[PredictionResult],
) -> Result<String, InsightError> {
    if results.is_empty() {
        return Ok(NO_DATA_ANSWER.to_string());
    }
    if question.is_empty() {
        return Err(InsightError::new("Please provide a question."));
    }

    match source.ask(question, results).await {
        Ok(answer) => {
            info!(results = results.len(), "question answered");
            Ok(answer)
        }
        Err(e) => {
            warn!(error = %e, "question answering failed");
            Err(InsightError::new("Failed to get an answer from the AI."))
        }
    }
}
