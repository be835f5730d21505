//! Synthetic batch scoring.
//!
//! Batch uploads are not parsed: the file name is the only input, and the
//! results are generated. The output has the same shape real batch
//! inference would produce so the dashboard path is exercised end to end.

use rand::Rng;

use crate::ids;
use crate::models::feature::FeatureImportance;
use crate::models::prediction::{BatchPrediction, PredictionLabel, PredictionResult};
use crate::models::transaction::Transaction;

/// Number of results produced per batch run.
pub const BATCH_SIZE: usize = 15;

/// Scores strictly above this are labelled fraudulent.
pub const FRAUD_THRESHOLD: f64 = 0.8;

/// Synthetic results carry features `V1` through `V{SYNTHETIC_FEATURES}`.
pub const SYNTHETIC_FEATURES: usize = 10;

const FEATURE_VALUE_MAX: f64 = 10.0;

/// Fixed importance ranking reported for every batch run.
const CANNED_IMPORTANCE: [(&str, f64); 10] = [
    ("V17", 0.18),
    ("V14", 0.15),
    ("V12", 0.12),
    ("V10", 0.10),
    ("V11", 0.09),
    ("V16", 0.08),
    ("V7", 0.07),
    ("V4", 0.06),
    ("V3", 0.05),
    ("V9", 0.04),
];

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate [`BATCH_SIZE`] independently randomized results.
///
/// The label is derived from the rounded score, so `Fraudulent` holds
/// exactly when the reported `risk_score > FRAUD_THRESHOLD`.
pub fn synthesize_batch<R: Rng>(rng: &mut R) -> BatchPrediction {
    let results = (1..=BATCH_SIZE)
        .map(|index| {
            let transaction: Transaction = (1..=SYNTHETIC_FEATURES)
                .map(|n| (format!("V{n}"), rng.gen_range(0.0..FEATURE_VALUE_MAX)))
                .collect();

            let risk_score = round2(rng.r#gen::<f64>());
            let prediction = if risk_score > FRAUD_THRESHOLD {
                PredictionLabel::Fraudulent
            } else {
                PredictionLabel::NotFraudulent
            };

            PredictionResult {
                id: ids::batch_id(index),
                transaction,
                prediction,
                risk_score,
            }
        })
        .collect();

    BatchPrediction {
        results,
        feature_importance: canned_feature_importance(),
    }
}

/// The fixed top-10 ranking attached to batch output.
pub fn canned_feature_importance() -> Vec<FeatureImportance> {
    CANNED_IMPORTANCE
        .iter()
        .map(|(feature, weight)| FeatureImportance::new(*feature, *weight))
        .collect()
}
