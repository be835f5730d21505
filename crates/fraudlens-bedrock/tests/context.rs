use fraudlens_bedrock::context::build_results_block;
use fraudlens_core::models::prediction::{PredictionLabel, PredictionResult};
use fraudlens_core::models::transaction::Transaction;

fn result(id: &str, prediction: PredictionLabel, risk_score: f64) -> PredictionResult {
    PredictionResult {
        id: id.to_string(),
        transaction: [("Amount", 12.5), ("V1", -1.25)].into_iter().collect::<Transaction>(),
        prediction,
        risk_score,
    }
}

#[test]
fn empty_results_returns_empty_string() {
    assert_eq!(build_results_block(&[]), "");
}

#[test]
fn single_result_produces_valid_block() {
    let block = build_results_block(&[result("txn_1", PredictionLabel::Fraudulent, 0.93)]);
    assert!(block.starts_with("<prediction_results count=\"1\" flagged=\"1\">"));
    assert!(block.ends_with("</prediction_results>"));
    assert!(block.contains(
        "<transaction id=\"txn_1\" prediction=\"Fraudulent\" risk_score=\"0.9300\">"
    ));
    assert!(block.contains("Amount=12.5, V1=-1.25"));
}

#[test]
fn multiple_results_all_included() {
    let block = build_results_block(&[
        result("txn_1", PredictionLabel::Fraudulent, 0.93),
        result("txn_2", PredictionLabel::NotFraudulent, 0.04),
    ]);
    assert!(block.contains("count=\"2\" flagged=\"1\""));
    assert!(block.contains("id=\"txn_1\""));
    assert!(block.contains("id=\"txn_2\" prediction=\"Not Fraudulent\""));
}
