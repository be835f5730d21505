//! fraudlens-bedrock
//!
//! AI summaries and question answering over prediction results, backed by
//! the Bedrock Converse API.

pub mod client;
pub mod context;
pub mod converse;
pub mod error;
pub mod insights;
pub mod reply;
pub mod usage;

pub use insights::BedrockInsights;
