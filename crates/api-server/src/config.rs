//! Server configuration

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Local frontend dev servers allowed to call the API
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024; // 50MB

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub addr: String,

    /// CORS allow-list; requests from other origins get no CORS headers
    pub allowed_origins: Vec<String>,

    /// Maximum request body size
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `API_SERVER_ADDR`: Bind address (default: "0.0.0.0:8000")
    /// - `STUDIA_CORS_ORIGINS`: Comma-separated origins (default: local dev servers)
    /// - `STUDIA_MAX_UPLOAD_BYTES`: Body limit in bytes (default: 50MB)
    #[must_use = "creates config from environment variables"]
    pub fn from_env() -> Self {
        let addr = env::var("API_SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        let allowed_origins = env::var("STUDIA_CORS_ORIGINS")
            .ok()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_origins);

        let max_upload_bytes = env::var("STUDIA_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            addr,
            allowed_origins,
            max_upload_bytes,
        }
    }
}

fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|s| (*s).to_string()).collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            allowed_origins: default_origins(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
