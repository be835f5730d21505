use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Square matrix backing the feature correlation heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major, `labels.len()` x `labels.len()`.
    pub values: Vec<Vec<f64>>,
}
