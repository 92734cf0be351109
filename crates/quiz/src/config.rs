//! Configuration for the Gemini client and prompt construction

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "Korean";
pub const DEFAULT_MAX_EXCERPT_CHARS: usize = 15_000;

/// Connection settings for the Gemini `generateContent` API
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,

    /// API root, without trailing slash
    pub base_url: String,

    /// Upper bound on a single generation request, in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `GEMINI_API_KEY`: API key (required)
    /// - `GEMINI_MODEL`: Model name (default: "gemini-2.5-flash")
    /// - `GEMINI_API_BASE`: API root (default: Google's v1beta endpoint)
    /// - `GEMINI_TIMEOUT_SECS`: Request timeout (default: 120)
    ///
    /// # Errors
    /// Returns an error if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("GEMINI_API_KEY environment variable not set")?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url = env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        })
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Prompt settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Language the questions must be written in
    pub output_language: String,

    /// Only this many leading characters of the text are sent to the model
    pub max_excerpt_chars: usize,
}

impl QuizConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `QUIZ_OUTPUT_LANGUAGE`: Output language (default: "Korean")
    /// - `QUIZ_MAX_EXCERPT_CHARS`: Excerpt length (default: 15000)
    #[must_use = "creates config from environment variables"]
    pub fn from_env() -> Self {
        let output_language = env::var("QUIZ_OUTPUT_LANGUAGE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_LANGUAGE.to_string());

        let max_excerpt_chars = env::var("QUIZ_MAX_EXCERPT_CHARS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_EXCERPT_CHARS);

        Self {
            output_language,
            max_excerpt_chars,
        }
    }
}

impl Default for QuizConfig {
    #[inline]
    fn default() -> Self {
        Self {
            output_language: DEFAULT_OUTPUT_LANGUAGE.to_string(),
            max_excerpt_chars: DEFAULT_MAX_EXCERPT_CHARS,
        }
    }
}
