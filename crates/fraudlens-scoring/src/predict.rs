use std::sync::Arc;

use fraudlens_core::models::prediction::SinglePrediction;
use fraudlens_core::models::transaction::Transaction;
use fraudlens_core::normalize;
use tracing::{debug, error, info};

use crate::endpoint::{HttpEndpoint, ModelEndpoint};
use crate::error::ScoringError;

/// Scores single transactions against the configured model endpoint.
///
/// A predictor without an endpoint still constructs; every call then fails
/// with [`ScoringError::NotConfigured`] so the operator can fix the
/// configuration without restarting the UI session.
#[derive(Clone, Default)]
pub struct Predictor {
    endpoint: Option<Arc<dyn ModelEndpoint>>,
}

impl Predictor {
    pub fn new(endpoint: Option<Arc<dyn ModelEndpoint>>) -> Self {
        Self { endpoint }
    }

    /// HTTP predictor for `url`, or an unconfigured one when `url` is
    /// missing or blank.
    pub fn from_url(url: Option<&str>) -> Self {
        let endpoint = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(|u| Arc::new(HttpEndpoint::new(u)) as Arc<dyn ModelEndpoint>);
        Self { endpoint }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// One best-effort round trip: validate, POST, normalize. No retries.
    pub async fn predict_fraud(
        &self,
        transaction: Transaction,
    ) -> Result<SinglePrediction, ScoringError> {
        let outcome = self.score(transaction).await;
        if let Err(e) = &outcome {
            error!(error = %e, "prediction failed");
        }
        outcome
    }

    async fn score(&self, transaction: Transaction) -> Result<SinglePrediction, ScoringError> {
        normalize::ensure_complete(&transaction)?;

        let endpoint = self.endpoint.as_ref().ok_or(ScoringError::NotConfigured)?;

        info!(
            endpoint = endpoint.url(),
            fields = transaction.len(),
            "requesting prediction"
        );

        let reply = endpoint.post(&transaction).await?;
        if !reply.is_success() {
            return Err(ScoringError::Status {
                status: reply.status,
                body: reply.body,
            });
        }

        let decoded: serde_json::Value =
            serde_json::from_str(&reply.body).map_err(|e| ScoringError::Decode(e.to_string()))?;
        debug!(reply = %decoded, "model endpoint reply");

        let prediction = normalize::normalize_response(transaction, &decoded)?;

        info!(
            id = %prediction.result.id,
            risk_score = prediction.result.risk_score,
            prediction = ?prediction.result.prediction,
            "prediction complete"
        );

        Ok(prediction)
    }
}
