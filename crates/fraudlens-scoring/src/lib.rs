//! fraudlens-scoring
//!
//! The two prediction actions: single-transaction scoring against the
//! external model endpoint, and the synthetic batch run.

pub mod batch;
pub mod endpoint;
pub mod error;
pub mod predict;

pub use batch::batch_predict_fraud;
pub use predict::Predictor;
