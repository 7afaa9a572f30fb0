use anyhow::Context;

use panda_server::config::ServerConfig;
use panda_server::{logging, shutdown};
use panda_server::rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    logging::init(&config);

    let state = AppState::from_config(&config);
    tracing::info!(
        alerts = state.alerts.count(),
        seeded = config.seed_sample_data,
        "alert store ready"
    );

    let app = rest::router(state);
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, environment = config.environment.as_str(), "Flying Panda API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_shutdown())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}
