use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Maximum number of ranked features kept per prediction.
pub const TOP_FEATURES: usize = 10;

/// Relative contribution of one input feature to a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

impl FeatureImportance {
    pub fn new(feature: impl Into<String>, importance: f64) -> Self {
        Self {
            feature: feature.into(),
            importance,
        }
    }
}
