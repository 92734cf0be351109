//! API Server Binary Entry Point

use anyhow::Context;
use std::sync::Arc;
use studia_api_server::{start_server, ApiState, ServerConfig};
use studia_extractor::{ExtractorConfig, HybridExtractor};
use studia_quiz::{GeminiClient, GeminiConfig, QuizConfig, QuizGenerator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "studia_api_server=info,studia_extractor=info,studia_quiz=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_config = ServerConfig::from_env();

    let extractor = HybridExtractor::from_config(ExtractorConfig::from_env())
        .context("Failed to initialize PDF extractor")?;

    let gemini_config = GeminiConfig::from_env()?;
    tracing::info!(
        "Using model {} (timeout {}s)",
        gemini_config.model,
        gemini_config.timeout_secs
    );
    let client = GeminiClient::new(gemini_config)?;
    let generator = QuizGenerator::new(Arc::new(client), QuizConfig::from_env());

    let state = ApiState::new(Arc::new(extractor), Arc::new(generator));

    tracing::info!("Starting Studia quiz API server");
    start_server(&server_config, state).await?;

    Ok(())
}
