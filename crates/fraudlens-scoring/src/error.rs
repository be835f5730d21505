use fraudlens_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(
        "The model API endpoint is not configured. Please set FRAUDLENS_MODEL_ENDPOINT in your environment variables."
    )]
    NotConfigured,

    #[error("API call failed with status: {status}. Body: {body}")]
    Status { status: u16, body: String },

    #[error("request to model endpoint failed: {0}")]
    Transport(String),

    #[error("model endpoint returned invalid JSON: {0}")]
    Decode(String),

    #[error("No file provided for batch prediction.")]
    MissingFile,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
