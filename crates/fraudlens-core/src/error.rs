use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Incomplete transaction data provided.")]
    IncompleteTransaction { fields: usize },

    #[error("The backend response was not a JSON object.")]
    NotAnObject,

    #[error("The backend response did not include a 'risk_score' or similar field.")]
    MissingScoreField,

    #[error("The backend returned a non-numeric risk score in '{field}': {value}")]
    InvalidScore { field: String, value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
