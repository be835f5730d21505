//! Token accounting for Converse calls.

use aws_sdk_bedrockruntime::types::TokenUsage;

/// USD per million input and output tokens, matched by model family.
/// Approximate list prices; unknown models get no estimate.
const PRICE_TABLE: [(&str, f64, f64); 3] = [
    ("claude-opus-4", 15.0, 75.0),
    ("claude-sonnet-4", 3.0, 15.0),
    ("claude-haiku", 0.80, 4.0),
];

/// Tokens spent by one call and what they are estimated to cost.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CallUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost_usd: Option<f64>,
}

impl CallUsage {
    pub fn new(model_id: &str, input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            cost_usd: estimate_cost(model_id, input_tokens, output_tokens),
        }
    }

    /// Read the counts from a Converse response's usage block.
    pub fn from_sdk(model_id: &str, usage: &TokenUsage) -> Self {
        let count = |n: i32| u64::try_from(n).unwrap_or(0);
        Self::new(
            model_id,
            count(usage.input_tokens()),
            count(usage.output_tokens()),
        )
    }

    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// `(input, output)` price per million tokens for `model_id`.
pub fn price_per_million(model_id: &str) -> Option<(f64, f64)> {
    PRICE_TABLE
        .iter()
        .find(|(family, _, _)| model_id.contains(family))
        .map(|&(_, input, output)| (input, output))
}

pub fn estimate_cost(model_id: &str, input_tokens: u64, output_tokens: u64) -> Option<f64> {
    let (input, output) = price_per_million(model_id)?;
    Some((input_tokens as f64 * input + output_tokens as f64 * output) / 1_000_000.0)
}
