use aws_sdk_bedrockruntime::Client;
use fraudlens_core::insights::{BoxFuture, InsightError, InsightSource};
use fraudlens_core::models::prediction::PredictionResult;
use tracing::{info, warn};

use crate::context::build_results_block;
use crate::converse::invoke_converse;
use crate::error::BedrockError;
use crate::reply::{AnswerReply, SummaryReply, parse_reply};

const SUMMARY_SYSTEM_PROMPT: &str = "\
You are a fraud analyst reviewing model predictions for card transactions. \
Features V1..V28 are anonymized principal components; Amount is the transaction amount. \
Write a short plain-English summary of the results: how many transactions were scored, \
how many were flagged as fraudulent, the spread of risk scores, and anything that \
stands out. Respond with only a JSON object of the form {\"summary\": \"...\"}.";

const ANSWER_SYSTEM_PROMPT: &str = "\
You are a fraud analyst answering questions about a set of model predictions for card \
transactions. Features V1..V28 are anonymized principal components; Amount is the \
transaction amount. Answer using only the provided results, and say so when the results \
do not contain the answer. Respond with only a JSON object of the form {\"answer\": \"...\"}.";

/// [`InsightSource`] backed by a Claude model on Bedrock.
#[derive(Clone)]
pub struct BedrockInsights {
    client: Client,
    model_id: String,
}

impl BedrockInsights {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    pub async fn summarize_results(
        &self,
        results: &[PredictionResult],
    ) -> Result<String, BedrockError> {
        let user_message = format!(
            "{}\n\nSummarize these prediction results.",
            build_results_block(results)
        );

        let reply = invoke_converse(
            &self.client,
            &self.model_id,
            SUMMARY_SYSTEM_PROMPT,
            &user_message,
        )
        .await?;

        info!(
            model = %self.model_id,
            results = results.len(),
            input_tokens = reply.usage.input_tokens,
            output_tokens = reply.usage.output_tokens,
            cost_usd = ?reply.usage.cost_usd,
            stop_reason = %reply.stop_reason,
            "summary generated"
        );

        Ok(parse_reply::<SummaryReply>(&reply.text)?.summary)
    }

    pub async fn answer_question(
        &self,
        question: &str,
        results: &[PredictionResult],
    ) -> Result<String, BedrockError> {
        let user_message = format!(
            "{}\n\nQuestion: {question}",
            build_results_block(results)
        );

        let reply = invoke_converse(
            &self.client,
            &self.model_id,
            ANSWER_SYSTEM_PROMPT,
            &user_message,
        )
        .await?;

        info!(
            model = %self.model_id,
            results = results.len(),
            input_tokens = reply.usage.input_tokens,
            output_tokens = reply.usage.output_tokens,
            cost_usd = ?reply.usage.cost_usd,
            stop_reason = %reply.stop_reason,
            "question answered"
        );

        Ok(parse_reply::<AnswerReply>(&reply.text)?.answer)
    }
}

impl InsightSource for BedrockInsights {
    fn summarize<'a>(
        &'a self,
        results: &'a [PredictionResult],
    ) -> BoxFuture<'a, Result<String, InsightError>> {
        Box::pin(async move {
            self.summarize_results(results).await.map_err(|e| {
                warn!(error = %e, "bedrock summary failed");
                InsightError::new(e.to_string())
            })
        })
    }

    fn ask<'a>(
        &'a self,
        question: &'a str,
        results: &'a [PredictionResult],
    ) -> BoxFuture<'a, Result<String, InsightError>> {
        Box::pin(async move {
            self.answer_question(question, results).await.map_err(|e| {
                warn!(error = %e, "bedrock answer failed");
                InsightError::new(e.to_string())
            })
        })
    }
}
