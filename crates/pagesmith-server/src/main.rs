//! Pagesmith server binary.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pagesmith::generator::{ChatSession, PageGenerator};
use pagesmith_gemini::ChatGemini;
use pagesmith_server::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("loading configuration")?;
    tracing::info!(
        addr = %config.addr,
        model = %config.model,
        temperature = config.temperature,
        "starting pagesmith-server"
    );

    let model = ChatGemini::new()
        .with_model(config.model.clone())
        .with_temperature(config.temperature);
    let generator = PageGenerator::new(Arc::new(model));
    let state = AppState::new(ChatSession::new(generator));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}
