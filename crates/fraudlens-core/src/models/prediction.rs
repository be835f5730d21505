use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::feature::FeatureImportance;
use super::transaction::Transaction;

/// Binary model verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PredictionLabel {
    Fraudulent,
    #[serde(rename = "Not Fraudulent")]
    NotFraudulent,
}

impl PredictionLabel {
    /// The model reports fraud as the number `1`; anything else is clean.
    pub fn from_model_value(value: Option<&serde_json::Value>) -> Self {
        match value.and_then(|v| v.as_f64()) {
            Some(n) if n == 1.0 => PredictionLabel::Fraudulent,
            _ => PredictionLabel::NotFraudulent,
        }
    }

    pub fn is_fraudulent(self) -> bool {
        self == PredictionLabel::Fraudulent
    }
}

/// A scored transaction. The features sit alongside `id`, `prediction`
/// and `riskScore` in one flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PredictionResult {
    pub id: String,
    #[serde(flatten)]
    pub transaction: Transaction,
    pub prediction: PredictionLabel,
    /// Model-estimated fraud probability in `[0, 1]`.
    pub risk_score: f64,
}

/// Output of one single-transaction round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SinglePrediction {
    pub result: PredictionResult,
    pub feature_importance: Vec<FeatureImportance>,
}

/// Output of one batch round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BatchPrediction {
    pub results: Vec<PredictionResult>,
    pub feature_importance: Vec<FeatureImportance>,
}
