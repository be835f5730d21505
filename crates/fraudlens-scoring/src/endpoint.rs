use std::future::Future;
use std::pin::Pin;

use fraudlens_core::models::transaction::Transaction;

use crate::error::ScoringError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Raw reply from the model endpoint, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReply {
    pub status: u16,
    pub body: String,
}

impl EndpointReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the externally hosted prediction model.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ModelEndpoint: Send + Sync {
    /// Where requests go, for logging.
    fn url(&self) -> &str;

    /// POST the transaction as JSON. Non-2xx statuses are returned as
    /// replies, not errors; only transport failures are errors.
    fn post<'a>(
        &'a self,
        transaction: &'a Transaction,
    ) -> BoxFuture<'a, Result<EndpointReply, ScoringError>>;
}

/// [`ModelEndpoint`] over plain HTTP using a blocking `ureq` agent on the
/// tokio blocking pool.
#[derive(Clone)]
pub struct HttpEndpoint {
    url: String,
    agent: ureq::Agent,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();

        Self {
            url: url.into(),
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl ModelEndpoint for HttpEndpoint {
    fn url(&self) -> &str {
        &self.url
    }

    fn post<'a>(
        &'a self,
        transaction: &'a Transaction,
    ) -> BoxFuture<'a, Result<EndpointReply, ScoringError>> {
        Box::pin(async move {
            let payload = serde_json::to_string(transaction)?;
            let agent = self.agent.clone();
            let url = self.url.clone();

            tokio::task::spawn_blocking(move || {
                let mut response = agent
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .send(payload.as_str())
                    .map_err(|e| ScoringError::Transport(e.to_string()))?;

                let status = response.status().as_u16();
                let body = response
                    .body_mut()
                    .read_to_string()
                    .map_err(|e| ScoringError::Transport(e.to_string()))?;

                Ok::<_, ScoringError>(EndpointReply { status, body })
            })
            .await
            .map_err(|e| ScoringError::Transport(format!("request task failed: {e}")))?
        })
    }
}
