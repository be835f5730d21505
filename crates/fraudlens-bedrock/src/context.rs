//! Results context builder for AI prompts.
//!
//! Renders the current prediction results into a structured block that is
//! sent alongside the user turn, so the model sees every scored transaction.

use fraudlens_core::models::prediction::{PredictionLabel, PredictionResult};

/// Build an XML-style block describing `results`.
///
/// If `results` is empty, returns an empty string.
pub fn build_results_block(results: &[PredictionResult]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let flagged = results
        .iter()
        .filter(|r| r.prediction.is_fraudulent())
        .count();

    let mut block = format!(
        "<prediction_results count=\"{}\" flagged=\"{flagged}\">\n",
        results.len()
    );

    for result in results {
        let label = match result.prediction {
            PredictionLabel::Fraudulent => "Fraudulent",
            PredictionLabel::NotFraudulent => "Not Fraudulent",
        };
        block.push_str(&format!(
            "<transaction id=\"{}\" prediction=\"{label}\" risk_score=\"{:.4}\">\n",
            result.id, result.risk_score
        ));
        let features = result
            .transaction
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        block.push_str(&features);
        block.push_str("\n</transaction>\n");
    }

    block.push_str("</prediction_results>");
    block
}
