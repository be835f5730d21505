use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Daily aggregate of scored transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransactionPattern {
    #[ts(type = "string")]
    pub date: jiff::civil::Date,
    pub total: u32,
    pub fraudulent: u32,
}
