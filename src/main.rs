mod config;
mod deck;
mod error;
mod export;
mod gemini;
mod llm;
mod models;
mod pdf;
mod pipeline;
mod prompts;
mod retry;
mod routes;
mod stream_parser;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;
use crate::deck::DeckStore;
use crate::gemini::GeminiClient;
use crate::llm::OpenAiClient;
use crate::pipeline::Pipeline;
use crate::routes::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();
    if config.llm.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; text generation needs a per-request apiKey");
    }
    if config.image.is_demo() {
        tracing::info!("No GEMINI_API_KEY, image generation runs in demo mode");
    }
    tracing::info!(
        base_url = %config.llm.display_base_url(),
        model = %config.llm.model,
        image_model = %config.image.model,
        max_retries = config.retry.max_retries,
        "Configuration loaded"
    );

    let pipeline = Pipeline::new(
        Arc::new(OpenAiClient::new(config.llm.clone(), config.retry)),
        Arc::new(GeminiClient::new(config.image.clone(), config.retry)),
    );
    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        store: DeckStore::default(),
        pipeline,
    };
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
