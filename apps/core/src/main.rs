// CeylonCare V1 Backend Entry Point
// Two inference backends: the bilingual chatbot and the therapy recommender

mod artifacts;
mod chat;
mod config;
mod error;
mod models;
mod server;
mod therapy;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    info!(bind = %config.bind, data_dir = %config.data_dir.display(), "starting backend");

    let context = Arc::new(artifacts::load(&config.data_dir)?);
    let app = server::router(context);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("listening on http://{}", config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
