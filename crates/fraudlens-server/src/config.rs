use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_BATCH_DELAY_MS: u64 = 2500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// URL of the external prediction model. Optional so the dashboard can
    /// start unconfigured; predictions then fail with a configuration error.
    #[serde(default)]
    pub model_endpoint: Option<String>,
    #[serde(default = "default_region")]
    pub aws_region: String,
    /// Bedrock inference profile for summaries and Q&A. Without it the AI
    /// panel degrades to placeholders.
    #[serde(default)]
    pub bedrock_model_id: Option<String>,
    /// Simulated processing time for batch runs. Added in v1.
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_batch_delay_ms() -> u64 {
    DEFAULT_BATCH_DELAY_MS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind_addr: default_bind_addr(),
            model_endpoint: None,
            aws_region: default_region(),
            bedrock_model_id: None,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
        }
    }
}

impl ServerConfig {
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    /// Overlay environment variables on top of file values.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> eyre::Result<Self> {
        if let Some(v) = lookup("FRAUDLENS_MODEL_ENDPOINT") {
            self.model_endpoint = Some(v);
        }
        if let Some(v) = lookup("FRAUDLENS_BIND_ADDR") {
            self.bind_addr = v;
        }
        if let Some(v) = lookup("FRAUDLENS_BEDROCK_MODEL_ID") {
            self.bedrock_model_id = Some(v);
        }
        if let Some(v) = lookup("AWS_REGION") {
            self.aws_region = v;
        }
        if let Some(v) = lookup("FRAUDLENS_BATCH_DELAY_MS") {
            self.batch_delay_ms = v
                .parse()
                .map_err(|e| eyre::eyre!("FRAUDLENS_BATCH_DELAY_MS={v} is not a number: {e}"))?;
        }

        self.model_endpoint = self.model_endpoint.filter(|s| !s.trim().is_empty());
        self.bedrock_model_id = self.bedrock_model_id.filter(|s| !s.trim().is_empty());
        Ok(self)
    }
}

/// Whether `FRAUDLENS_LOG_JSON` asks for structured JSON logs.
pub fn log_json_requested() -> bool {
    std::env::var("FRAUDLENS_LOG_JSON")
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn config_path() -> eyre::Result<PathBuf> {
    if let Ok(path) = std::env::var("FRAUDLENS_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("fraudlens").join("config.json"))
}

/// Load the config file (if any), migrate it, then apply environment
/// overrides.
pub fn load_config() -> eyre::Result<ServerConfig> {
    let path = config_path()?;

    let config = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "config loaded");
        parse_config(&contents)?
    } else {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        ServerConfig::default()
    };

    config.apply_overrides(|key| std::env::var(key).ok())
}

/// Parse config JSON, running migrations before deserializing.
pub fn parse_config(contents: &str) -> eyre::Result<ServerConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ServerConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update FraudLens."
        ));
    }

    // v0 → v1: the endpoint key was `api_endpoint`; batch delay became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(endpoint) = obj.remove("api_endpoint") {
            obj.entry("model_endpoint").or_insert(endpoint);
        }
        obj.entry("batch_delay_ms")
            .or_insert(serde_json::Value::Number(DEFAULT_BATCH_DELAY_MS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (renamed api_endpoint, added batch_delay_ms)");
    }

    Ok(json)
}
