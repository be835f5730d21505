//! Parsing of structured model replies.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::BedrockError;

#[derive(Debug, Deserialize)]
pub struct SummaryReply {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct AnswerReply {
    pub answer: String,
}

/// Parse the JSON object in a model reply.
///
/// Models sometimes wrap the object in prose or a code fence, so parsing
/// starts at the first `{` and ends at the last `}`.
pub fn parse_reply<T: DeserializeOwned>(text: &str) -> Result<T, BedrockError> {
    let start = text.find('{');
    let end = text.rfind('}');
    let json = match (start, end) {
        (Some(s), Some(e)) if s < e => &text[s..=e],
        _ => {
            return Err(BedrockError::ResponseParse(text.to_string()));
        }
    };

    serde_json::from_str(json).map_err(|e| {
        BedrockError::SchemaViolation(format!("{e}. Response: {text}"))
    })
}
