use fraudlens_core::batch::{
    BATCH_SIZE, FRAUD_THRESHOLD, canned_feature_importance, round2, synthesize_batch,
};
use fraudlens_core::correlation::sample_matrix;
use fraudlens_core::models::prediction::PredictionLabel;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn batch_always_has_fifteen_results() {
    for seed in 0..20 {
        let batch = synthesize_batch(&mut StdRng::seed_from_u64(seed));
        assert_eq!(batch.results.len(), BATCH_SIZE);
    }
}

#[test]
fn labels_follow_the_rounded_score() {
    for seed in 0..50 {
        for result in synthesize_batch(&mut StdRng::seed_from_u64(seed)).results {
            assert_eq!(round2(result.risk_score), result.risk_score);
            assert!((0.0..=1.0).contains(&result.risk_score));
            assert_eq!(
                result.prediction == PredictionLabel::Fraudulent,
                result.risk_score > FRAUD_THRESHOLD
            );
        }
    }
}

#[test]
fn synthetic_results_carry_ten_features_below_ten() {
    let batch = synthesize_batch(&mut StdRng::seed_from_u64(7));
    for (i, result) in batch.results.iter().enumerate() {
        assert!(result.id.starts_with(&format!("batch_{}_", i + 1)));
        assert_eq!(result.transaction.len(), 10);
        assert!(result.transaction.iter().all(|(_, v)| (0.0..10.0).contains(&v)));
        assert!(result.transaction.get("V10").is_some());
    }
}

#[test]
fn batch_importance_is_the_canned_ranking() {
    let batch = synthesize_batch(&mut StdRng::seed_from_u64(1));
    assert_eq!(batch.feature_importance, canned_feature_importance());
    assert_eq!(batch.feature_importance.len(), 10);
    assert_eq!(batch.feature_importance[0].feature, "V17");
    assert_eq!(batch.feature_importance[9].feature, "V9");
    assert!(
        batch
            .feature_importance
            .windows(2)
            .all(|w| w[0].importance >= w[1].importance)
    );
}

#[test]
fn correlation_sample_is_ten_by_ten() {
    let matrix = sample_matrix(&mut StdRng::seed_from_u64(3));
    assert_eq!(matrix.labels.first().map(String::as_str), Some("V1"));
    assert_eq!(matrix.labels.last().map(String::as_str), Some("V10"));
    assert_eq!(matrix.values.len(), 10);
    for row in &matrix.values {
        assert_eq!(row.len(), 10);
        assert!(row.iter().all(|v| (0.0..=1.0).contains(v) && round2(*v) == *v));
    }
}
