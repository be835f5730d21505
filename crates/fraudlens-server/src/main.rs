use eyre::Result;
use tracing_subscriber::EnvFilter;

use fraudlens_server::config;
use fraudlens_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config::log_json_requested() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = config::load_config()?;
    let state = AppState::from_config(&config).await;
    let app = fraudlens_server::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| eyre::eyre!("failed to bind {}: {e}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "fraudlens listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| eyre::eyre!("server error: {e}"))?;

    Ok(())
}
