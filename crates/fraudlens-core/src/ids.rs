//! Short opaque identifiers for results and chat messages.

use uuid::Uuid;

const SUFFIX_LEN: usize = 9;

/// Nine lowercase alphanumeric characters taken from a fresh v4 UUID.
pub fn short_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..SUFFIX_LEN].to_string()
}

/// Id for a single-transaction result, e.g. `txn_3f9a0c1d2`.
pub fn transaction_id() -> String {
    format!("txn_{}", short_suffix())
}

/// Id for the `index`-th (1-based) synthetic batch result.
pub fn batch_id(index: usize) -> String {
    format!("batch_{index}_{}", short_suffix())
}

pub fn user_message_id() -> String {
    format!("user-{}", Uuid::new_v4())
}

pub fn assistant_message_id() -> String {
    format!("ai-{}", Uuid::new_v4())
}

pub fn error_message_id() -> String {
    format!("error-{}", Uuid::new_v4())
}
