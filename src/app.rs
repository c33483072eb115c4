use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::bootstrap;
use crate::infrastructure::config::ServiceConfig;
use crate::interfaces::http::start_server;

pub async fn run() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = ServiceConfig::load().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let state = bootstrap::setup(&config).with_context(|| {
        format!(
            "Failed to load race results from {}",
            config.data_dir.display()
        )
    })?;

    let server = start_server(state, &config.host, config.port)
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    server.await?;

    info!("HTTP server stopped");
    Ok(())
}
