//! Exercises `HttpEndpoint` against a one-shot local HTTP listener.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use fraudlens_core::models::prediction::PredictionLabel;
use fraudlens_core::models::transaction::Transaction;
use fraudlens_scoring::Predictor;
use fraudlens_scoring::error::ScoringError;

/// Serve exactly one request with the given status line and body. The
/// received request body is sent back over the returned channel.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let url = format!("http://{}/predict", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            let n = stream.read(&mut chunk).expect("read request");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).expect("read body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body =
            String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        let _ = tx.send(request_body);
    });

    (url, rx)
}

fn transaction() -> Transaction {
    (1..=10).map(|n| (format!("V{n}"), n as f64 / 10.0)).collect()
}

#[tokio::test]
async fn posts_transaction_json_and_normalizes_reply() {
    let (url, rx) = serve_once("200 OK", r#"{"prediction": 1, "risk_score": 0.93}"#);

    let out = Predictor::from_url(Some(url.as_str()))
        .predict_fraud(transaction())
        .await
        .expect("prediction should succeed");

    assert_eq!(out.result.prediction, PredictionLabel::Fraudulent);
    assert_eq!(out.result.risk_score, 0.93);

    let sent: serde_json::Value = serde_json::from_str(&rx.recv().unwrap()).unwrap();
    assert_eq!(sent["V1"], 0.1);
    assert_eq!(sent.as_object().unwrap().len(), 10);
}

#[tokio::test]
async fn error_status_is_not_swallowed() {
    let (url, _rx) = serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#);

    let err = Predictor::from_url(Some(url.as_str()))
        .predict_fraud(transaction())
        .await
        .unwrap_err();

    match err {
        ScoringError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
