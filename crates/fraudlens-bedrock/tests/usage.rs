use fraudlens_bedrock::usage::{CallUsage, estimate_cost, price_per_million};

#[test]
fn model_family_is_matched_inside_inference_profile_ids() {
    assert_eq!(
        price_per_million("us.anthropic.claude-sonnet-4-6"),
        Some((3.0, 15.0))
    );
    assert_eq!(
        price_per_million("global.anthropic.claude-haiku-4-5-20251001-v1:0"),
        Some((0.80, 4.0))
    );
}

#[test]
fn unknown_model_has_no_estimate() {
    assert_eq!(price_per_million("amazon.nova-pro-v1:0"), None);
    let usage = CallUsage::new("amazon.nova-pro-v1:0", 1200, 300);
    assert_eq!(usage.cost_usd, None);
    assert_eq!(usage.total_tokens(), 1500);
}

#[test]
fn cost_is_per_million_tokens() {
    let cost = estimate_cost("anthropic.claude-opus-4-1", 1_000_000, 100_000).unwrap();
    assert!((cost - 22.5).abs() < 1e-9);
}
