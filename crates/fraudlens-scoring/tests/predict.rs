use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fraudlens_core::models::prediction::PredictionLabel;
use fraudlens_core::models::transaction::Transaction;
use fraudlens_scoring::Predictor;
use fraudlens_scoring::endpoint::{BoxFuture, EndpointReply, ModelEndpoint};
use fraudlens_scoring::error::ScoringError;

/// Endpoint that returns a fixed reply and counts requests.
struct Canned {
    status: u16,
    body: String,
    calls: AtomicUsize,
}

impl Canned {
    fn new(status: u16, body: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    fn raw(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        })
    }
}

impl ModelEndpoint for Canned {
    fn url(&self) -> &str {
        "http://model.test/predict"
    }

    fn post<'a>(
        &'a self,
        _transaction: &'a Transaction,
    ) -> BoxFuture<'a, Result<EndpointReply, ScoringError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            Ok(EndpointReply {
                status: self.status,
                body: self.body.clone(),
            })
        })
    }
}

fn predictor(endpoint: &Arc<Canned>) -> Predictor {
    Predictor::new(Some(endpoint.clone() as Arc<dyn ModelEndpoint>))
}

fn transaction(fields: usize) -> Transaction {
    let mut txn: Transaction = (1..fields).map(|n| (format!("V{n}"), n as f64)).collect();
    txn.insert("Amount", 149.62);
    txn
}

#[tokio::test]
async fn fraudulent_reply_is_normalized() {
    let endpoint = Canned::new(200, serde_json::json!({"prediction": 1, "risk_score": 0.93}));
    let out = predictor(&endpoint)
        .predict_fraud(transaction(12))
        .await
        .expect("prediction should succeed");

    assert_eq!(out.result.prediction, PredictionLabel::Fraudulent);
    assert_eq!(out.result.risk_score, 0.93);
    assert_eq!(out.result.transaction.get("Amount"), Some(149.62));
    assert!(out.feature_importance.is_empty());
}

#[tokio::test]
async fn reply_without_score_is_an_error() {
    let endpoint = Canned::new(200, serde_json::json!({"prediction": 1}));
    let err = predictor(&endpoint)
        .predict_fraud(transaction(12))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("'risk_score' or similar field"));
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let endpoint = Canned::raw(503, "model warming up");
    let err = predictor(&endpoint)
        .predict_fraud(transaction(12))
        .await
        .unwrap_err();

    assert!(matches!(err, ScoringError::Status { status: 503, .. }));
    assert_eq!(
        err.to_string(),
        "API call failed with status: 503. Body: model warming up"
    );
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() {
    let endpoint = Canned::raw(200, "<html>oops</html>");
    let err = predictor(&endpoint)
        .predict_fraud(transaction(12))
        .await
        .unwrap_err();
    assert!(matches!(err, ScoringError::Decode(_)));
}

#[tokio::test]
async fn incomplete_transaction_never_reaches_the_endpoint() {
    let endpoint = Canned::new(200, serde_json::json!({"risk_score": 0.5}));
    let err = predictor(&endpoint)
        .predict_fraud(transaction(9))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Incomplete transaction data provided.");
    assert_eq!(endpoint.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_endpoint_is_a_configuration_error() {
    let err = Predictor::from_url(Some("   "))
        .predict_fraud(transaction(12))
        .await
        .unwrap_err();
    assert!(matches!(err, ScoringError::NotConfigured));
    assert!(err.to_string().contains("FRAUDLENS_MODEL_ENDPOINT"));
}

#[tokio::test]
async fn feature_importance_is_ranked_top_ten() {
    let weights: serde_json::Map<String, serde_json::Value> = (1..=15)
        .map(|n| (format!("V{n}"), serde_json::json!(n as f64)))
        .collect();
    let endpoint = Canned::new(
        200,
        serde_json::json!({"prediction": 0, "fraud_score": 0.07, "feature_importance": weights}),
    );
    let out = predictor(&endpoint)
        .predict_fraud(transaction(12))
        .await
        .expect("prediction should succeed");

    assert_eq!(out.result.prediction, PredictionLabel::NotFraudulent);
    assert_eq!(out.feature_importance.len(), 10);
    assert_eq!(out.feature_importance[0].feature, "V15");
}
