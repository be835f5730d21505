/// Build an `SdkConfig` for `region` using the default credential chain.
pub async fn build_config(region: &str) -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await
}

/// Build a Bedrock runtime client for `region`.
pub async fn build_runtime_client(region: &str) -> aws_sdk_bedrockruntime::Client {
    aws_sdk_bedrockruntime::Client::new(&build_config(region).await)
}
