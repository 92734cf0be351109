//! REST API server: PDF upload to generated study quiz
//!
//! `POST /upload` takes a multipart `file` field holding a PDF, extracts its
//! text (OCR for image-only pages), and returns a summary plus quiz questions
//! generated by the configured model.

pub mod config;
pub mod error;
mod handlers;
mod types;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use studia_extractor::TextExtractor;
use studia_quiz::QuizGenerator;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use config::ServerConfig;
pub use error::ApiError;
pub use handlers::*;
pub use types::*;

/// API server state shared across handlers
#[derive(Clone)]
pub struct ApiState {
    /// PDF bytes to text
    pub extractor: Arc<dyn TextExtractor>,
    /// Text to quiz
    pub generator: Arc<QuizGenerator>,
}

impl ApiState {
    #[must_use]
    pub fn new(extractor: Arc<dyn TextExtractor>, generator: Arc<QuizGenerator>) -> Self {
        Self {
            extractor,
            generator,
        }
    }
}

/// CORS for the configured origins only; methods and headers are mirrored
/// and credentials allowed
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the API router with all endpoints
pub fn build_router(state: ApiState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/upload", post(upload_and_generate))
        // Middleware
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}

/// Start the API server
pub async fn start_server(config: &ServerConfig, state: ApiState) -> Result<(), std::io::Error> {
    tracing::info!("Starting API server on {}", config.addr);

    let app = build_router(state, config);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;

    axum::serve(listener, app).await
}
