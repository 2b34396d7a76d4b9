mod config;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, GenerationBackend};
use crate::generation::generator::ContentGenerator;
use crate::generation::model_strategy::ModelBackedStrategy;
use crate::generation::strategy::{TemplateStrategy, VariantStrategy};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed or missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ContentFlow API v{}", env!("CARGO_PKG_VERSION"));

    let strategy = build_strategy(&config)?;
    info!(
        "Generation backend: {} (max {} variations, {}s timeout)",
        config.backend.name(),
        config.max_variations,
        config.generation_timeout.as_secs()
    );

    let generator = ContentGenerator::new(
        strategy,
        config.max_variations,
        config.generation_timeout,
    );

    let state = AppState { generator };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the variant strategy named by GENERATION_BACKEND.
fn build_strategy(config: &Config) -> Result<Arc<dyn VariantStrategy>> {
    match &config.backend {
        GenerationBackend::Template => Ok(Arc::new(TemplateStrategy)),
        GenerationBackend::Model { api_key } => {
            let llm = LlmClient::new(api_key.clone(), config.anthropic_api_url.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(ModelBackedStrategy::new(llm)))
        }
    }
}
