//! fraudlens-core
//!
//! Pure domain types and the dashboard state machine.
//! No network or AWS dependency: this is the shared vocabulary of FraudLens.

pub mod batch;
pub mod correlation;
pub mod dashboard;
pub mod error;
pub mod ids;
pub mod insights;
pub mod models;
pub mod normalize;
pub mod patterns;
