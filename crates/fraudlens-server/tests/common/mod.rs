//! Fakes shared by the server integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fraudlens_core::insights::{BoxFuture as InsightFuture, InsightError, InsightSource};
use fraudlens_core::models::prediction::PredictionResult;
use fraudlens_core::models::transaction::Transaction;
use fraudlens_scoring::Predictor;
use fraudlens_scoring::endpoint::{BoxFuture, EndpointReply, ModelEndpoint};
use fraudlens_scoring::error::ScoringError;
use fraudlens_server::state::AppState;
use tokio::sync::Notify;

pub const FRAUD_REPLY: &str = r#"{
    "prediction": 1,
    "risk_score": 0.93,
    "feature_importance": {"V14": 0.31, "V4": 0.22, "Amount": 0.05}
}"#;

/// Endpoint that returns a fixed reply. When gated, each request waits for
/// [`ModelStub::release`] after signalling [`ModelStub::entered`].
pub struct ModelStub {
    status: u16,
    body: String,
    gated: bool,
    pub entered: Notify,
    gate: Notify,
    pub calls: AtomicUsize,
}

impl ModelStub {
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            gated: false,
            entered: Notify::new(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn gated(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            gated: true,
            entered: Notify::new(),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn predictor(self: &Arc<Self>) -> Predictor {
        Predictor::new(Some(self.clone() as Arc<dyn ModelEndpoint>))
    }
}

impl ModelEndpoint for ModelStub {
    fn url(&self) -> &str {
        "http://model.test/predict"
    }

    fn post<'a>(
        &'a self,
        _transaction: &'a Transaction,
    ) -> BoxFuture<'a, Result<EndpointReply, ScoringError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if self.gated {
                self.entered.notify_one();
                self.gate.notified().await;
            }
            Ok(EndpointReply {
                status: self.status,
                body: self.body.clone(),
            })
        })
    }
}

/// Collaborator with fixed replies.
pub struct InsightStub {
    summary: Result<String, InsightError>,
    answer: Result<String, InsightError>,
    pub summarize_calls: AtomicUsize,
    pub ask_calls: AtomicUsize,
}

impl InsightStub {
    pub fn new(summary: &str, answer: &str) -> Arc<Self> {
        Arc::new(Self {
            summary: Ok(summary.to_string()),
            answer: Ok(answer.to_string()),
            summarize_calls: AtomicUsize::new(0),
            ask_calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            summary: Err(InsightError::new("model unavailable")),
            answer: Err(InsightError::new("model unavailable")),
            summarize_calls: AtomicUsize::new(0),
            ask_calls: AtomicUsize::new(0),
        })
    }
}

impl InsightSource for InsightStub {
    fn summarize<'a>(
        &'a self,
        _results: &'a [PredictionResult],
    ) -> InsightFuture<'a, Result<String, InsightError>> {
        self.summarize_calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move { self.summary.clone() })
    }

    fn ask<'a>(
        &'a self,
        _question: &'a str,
        _results: &'a [PredictionResult],
    ) -> InsightFuture<'a, Result<String, InsightError>> {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move { self.answer.clone() })
    }
}

pub fn state(predictor: Predictor, insights: Arc<InsightStub>) -> AppState {
    AppState::new(predictor, insights, Duration::ZERO)
}

pub fn transaction() -> Transaction {
    let mut txn: Transaction = (1..=28).map(|n| (format!("V{n}"), n as f64 / 10.0)).collect();
    txn.insert("Amount", 149.62);
    txn.insert("Time", 0.0);
    txn
}
