use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Minimum number of populated features before a transaction is scored.
pub const MIN_TRANSACTION_FIELDS: usize = 10;

/// One record of anonymized numeric features (`V1`..`V28`, `Amount`, ...).
///
/// Serialized as a flat JSON object, which is also the request body sent to
/// the prediction endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    #[serde(flatten)]
    features: BTreeMap<String, f64>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, feature: impl Into<String>, value: f64) -> Option<f64> {
        self.features.insert(feature.into(), value)
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.features.get(feature).copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.features.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Whether enough features are present to submit for scoring.
    pub fn is_complete(&self) -> bool {
        self.len() >= MIN_TRANSACTION_FIELDS
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Transaction {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
