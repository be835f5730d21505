//! Reshape a prediction endpoint reply into domain types.
//!
//! The endpoint is not under our control, so the reply is read loosely:
//!
//! ```json
//! { "prediction": 0 | 1, "<anything with score>": 0.93, "feature_importance": { "V14": 0.2 } }
//! ```
//!
//! The score key is guessed: the first key (in sorted order) whose lowercase
//! form contains `score`. This is a stand-in for a versioned response schema.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::CoreError;
use crate::ids;
use crate::models::feature::{FeatureImportance, TOP_FEATURES};
use crate::models::prediction::{PredictionLabel, PredictionResult, SinglePrediction};
use crate::models::transaction::Transaction;

const SCORE_MARKER: &str = "score";
const PREDICTION_KEY: &str = "prediction";
const FEATURE_IMPORTANCE_KEY: &str = "feature_importance";

/// Reject transactions with too few features to be worth scoring.
pub fn ensure_complete(transaction: &Transaction) -> Result<(), CoreError> {
    if transaction.is_complete() {
        Ok(())
    } else {
        Err(CoreError::IncompleteTransaction {
            fields: transaction.len(),
        })
    }
}

/// Build a [`SinglePrediction`] from the submitted transaction and the
/// endpoint's decoded JSON reply.
pub fn normalize_response(
    transaction: Transaction,
    reply: &Value,
) -> Result<SinglePrediction, CoreError> {
    let object = reply.as_object().ok_or(CoreError::NotAnObject)?;

    let (score_key, score_value) = find_score_field(object).ok_or(CoreError::MissingScoreField)?;
    let risk_score = parse_score(score_value).ok_or_else(|| CoreError::InvalidScore {
        field: score_key.clone(),
        value: score_value.to_string(),
    })?;

    let prediction = PredictionLabel::from_model_value(object.get(PREDICTION_KEY));

    let feature_importance = object
        .get(FEATURE_IMPORTANCE_KEY)
        .and_then(Value::as_object)
        .map(rank_feature_map)
        .unwrap_or_default();

    debug!(
        score_key = %score_key,
        risk_score,
        ?prediction,
        ranked_features = feature_importance.len(),
        "normalized prediction reply"
    );

    Ok(SinglePrediction {
        result: PredictionResult {
            id: ids::transaction_id(),
            transaction,
            prediction,
            risk_score,
        },
        feature_importance,
    })
}

/// First key whose lowercase form contains `score`.
pub fn find_score_field(object: &Map<String, Value>) -> Option<(&String, &Value)> {
    object
        .iter()
        .find(|(key, _)| key.to_lowercase().contains(SCORE_MARKER))
}

/// Read a score from a JSON number or a numeric string. Non-finite values
/// are rejected.
pub fn parse_score(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }?;
    score.is_finite().then_some(score)
}

/// Longest leading float in `s`, ignoring leading whitespace and any
/// trailing garbage (`"0.93 (calibrated)"` reads as `0.93`).
///
/// The prefix is `[+-]digits[.digits][(e|E)[+-]digits]` with at least one
/// mantissa digit. It is found in one pass and parsed once.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let skip_digits = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = skip_digits(sign);
    let mut mantissa_digits = end - sign;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = skip_digits(end + 1);
        mantissa_digits += fraction_end - (end + 1);
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent = end + 1 + usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_end = skip_digits(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    s[..end].parse().ok()
}

/// Convert a `feature -> weight` object into the ranked top-N list.
/// Entries whose weight is not a finite number are skipped.
pub fn rank_feature_map(map: &Map<String, Value>) -> Vec<FeatureImportance> {
    rank_features(map.iter().filter_map(|(feature, weight)| {
        weight
            .as_f64()
            .filter(|w| w.is_finite())
            .map(|w| FeatureImportance::new(feature.clone(), w))
    }))
}

/// Sort descending by weight and keep the top [`TOP_FEATURES`].
pub fn rank_features(
    features: impl IntoIterator<Item = FeatureImportance>,
) -> Vec<FeatureImportance> {
    let mut ranked: Vec<FeatureImportance> = features.into_iter().collect();
    ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    ranked.truncate(TOP_FEATURES);
    ranked
}
