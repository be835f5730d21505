use std::sync::Arc;
use std::time::Duration;

use fraudlens_bedrock::BedrockInsights;
use fraudlens_bedrock::client::build_runtime_client;
use fraudlens_core::dashboard::Dashboard;
use fraudlens_core::insights::{DisabledInsights, InsightSource};
use fraudlens_scoring::Predictor;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The dashboard is the single owner of UI state; it is locked only to
/// apply events, never across a network call.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<Dashboard>>,
    pub predictor: Predictor,
    pub insights: Arc<dyn InsightSource>,
    pub batch_delay: Duration,
}

impl AppState {
    pub fn new(
        predictor: Predictor,
        insights: Arc<dyn InsightSource>,
        batch_delay: Duration,
    ) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(Dashboard::default())),
            predictor,
            insights,
            batch_delay,
        }
    }

    pub async fn from_config(config: &ServerConfig) -> Self {
        let predictor = Predictor::from_url(config.model_endpoint.as_deref());
        if !predictor.is_configured() {
            tracing::warn!("FRAUDLENS_MODEL_ENDPOINT not set; single predictions will fail");
        }

        let insights: Arc<dyn InsightSource> = match &config.bedrock_model_id {
            Some(model_id) => {
                tracing::info!(model_id = %model_id, region = %config.aws_region, "AI insights enabled");
                let client = build_runtime_client(&config.aws_region).await;
                Arc::new(BedrockInsights::new(client, model_id.clone()))
            }
            None => {
                tracing::warn!("FRAUDLENS_BEDROCK_MODEL_ID not set; AI insights disabled");
                Arc::new(DisabledInsights)
            }
        };

        Self::new(predictor, insights, config.batch_delay())
    }
}
