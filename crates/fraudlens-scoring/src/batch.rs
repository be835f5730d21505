use std::time::Duration;

use fraudlens_core::batch::synthesize_batch;
use fraudlens_core::models::prediction::BatchPrediction;
use tracing::{error, info};

use crate::error::ScoringError;

/// Simulated processing time for a batch run.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(2500);

/// Score a batch upload.
///
/// Only the file name is received; the contents are never read. After
/// `delay`, a synthetic batch is generated (see
/// [`fraudlens_core::batch::synthesize_batch`]).
pub async fn batch_predict_fraud(
    file_name: &str,
    delay: Duration,
) -> Result<BatchPrediction, ScoringError> {
    tokio::time::sleep(delay).await;

    if file_name.is_empty() {
        error!("batch prediction requested without a file");
        return Err(ScoringError::MissingFile);
    }

    let batch = synthesize_batch(&mut rand::thread_rng());

    info!(
        file_name,
        results = batch.results.len(),
        flagged = batch
            .results
            .iter()
            .filter(|r| r.prediction.is_fraudulent())
            .count(),
        "synthetic batch generated"
    );

    Ok(batch)
}
