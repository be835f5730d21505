use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("Bedrock call failed: {0}")]
    Invocation(String),

    #[error("model returned no text")]
    EmptyReply,

    #[error("no JSON object in model reply: {0}")]
    ResponseParse(String),

    #[error("model reply has the wrong shape: {0}")]
    SchemaViolation(String),
}
