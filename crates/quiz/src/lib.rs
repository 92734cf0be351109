//! Study quiz generation from extracted document text
//!
//! The quiz size is derived from the text length ([`QuizPlan`]), the plan and
//! a leading excerpt of the text are rendered into an instruction, and the
//! model's reply is parsed into a [`QuizResult`]. Replies wrapped in a
//! markdown code fence are accepted.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use studia_quiz::{GeminiClient, GeminiConfig, QuizConfig, QuizGenerator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GeminiClient::new(GeminiConfig::from_env()?)?;
//!     let generator = QuizGenerator::new(Arc::new(client), QuizConfig::default());
//!
//!     let quiz = generator.generate("Photosynthesis converts light energy ...").await?;
//!     println!("{}", quiz.summary);
//!     println!("{}", quiz.questions);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod generator;
pub mod plan;
pub mod prompt;
pub mod response;
pub mod types;

pub use client::{GeminiClient, GenerativeModel};
pub use config::{GeminiConfig, QuizConfig};
pub use generator::QuizGenerator;
pub use plan::QuizPlan;
pub use types::{Answer, Question, QuestionKind, QuizResult};

use thiserror::Error;

/// Errors from a single generation attempt
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Model request failed: {0:#}")]
    Model(anyhow::Error),

    #[error("Model returned malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Model returned {0} instead of a JSON object")]
    NotAnObject(&'static str),
}

impl QuizError {
    /// Whether [`QuizGenerator::generate`] replaces this error with
    /// [`QuizResult::fallback`]. Only model failures and unparseable replies do.
    #[must_use]
    pub fn falls_back(&self) -> bool {
        matches!(self, QuizError::Model(_) | QuizError::MalformedJson(_))
    }
}
