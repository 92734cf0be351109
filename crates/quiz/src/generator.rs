//! Quiz generation: plan, prompt, model call, parse

use std::sync::Arc;
use tracing::{error, info};

use crate::client::GenerativeModel;
use crate::prompt::build_prompt;
use crate::response::parse_quiz_response;
use crate::{QuizConfig, QuizError, QuizPlan, QuizResult};

/// Turns extracted text into a [`QuizResult`] using a [`GenerativeModel`]
pub struct QuizGenerator {
    model: Arc<dyn GenerativeModel>,
    config: QuizConfig,
}

impl QuizGenerator {
    pub fn new(model: Arc<dyn GenerativeModel>, config: QuizConfig) -> Self {
        Self { model, config }
    }

    /// Generate a quiz, surfacing any failure.
    ///
    /// # Errors
    /// Returns [`QuizError`] if the model call fails or its reply cannot be parsed.
    pub async fn try_generate(&self, text: &str) -> Result<QuizResult, QuizError> {
        let plan = QuizPlan::for_text_length(text.chars().count());
        info!(
            "Requesting quiz: total={}, choice={}, short={}, essay={}",
            plan.total, plan.choice_count, plan.short_count, plan.essay_count
        );

        let prompt = build_prompt(&plan, text, &self.config);
        let raw = self.model.generate(&prompt).await.map_err(QuizError::Model)?;
        let result = parse_quiz_response(&raw)?;

        info!(
            "Quiz generated: {} questions",
            result.questions.as_array().map_or(0, Vec::len)
        );
        Ok(result)
    }

    /// Generate a quiz, degrading to [`QuizResult::fallback`] when the model
    /// call fails or its reply is not JSON.
    ///
    /// # Errors
    /// Returns [`QuizError::NotAnObject`] when the reply is valid JSON of the
    /// wrong shape.
    pub async fn generate(&self, text: &str) -> Result<QuizResult, QuizError> {
        match self.try_generate(text).await {
            Ok(result) => Ok(result),
            Err(e) if e.falls_back() => {
                error!("Quiz generation failed: {:#}", e);
                Ok(QuizResult::fallback())
            }
            Err(e) => Err(e),
        }
    }
}
