use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};

use crate::error::BedrockError;
use crate::usage::CallUsage;

/// Replies are short JSON objects; this caps runaway generations.
const MAX_REPLY_TOKENS: i32 = 1024;
const TEMPERATURE: f32 = 0.2;

/// Text and accounting from one Converse call.
#[derive(Debug, Clone)]
pub struct ConverseReply {
    pub text: String,
    pub usage: CallUsage,
    pub stop_reason: String,
}

/// One system prompt, one user turn, one reply.
pub async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<ConverseReply, BedrockError> {
    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(user_message.to_string()))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(message)
        .inference_config(
            InferenceConfiguration::builder()
                .max_tokens(MAX_REPLY_TOKENS)
                .temperature(TEMPERATURE)
                .build(),
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let text: String = response
        .output()
        .and_then(|o| o.as_message().ok())
        .map(|m| {
            m.content()
                .iter()
                .filter_map(|block| block.as_text().ok())
                .map(String::as_str)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(BedrockError::EmptyReply);
    }

    let usage = response
        .usage()
        .map(|u| CallUsage::from_sdk(model_id, u))
        .unwrap_or_default();

    Ok(ConverseReply {
        text,
        usage,
        stop_reason: response.stop_reason().as_str().to_string(),
    })
}
