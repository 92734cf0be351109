//! Quiz result and question types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary reported when the model call or its parsing failed
pub const FALLBACK_SUMMARY: &str = "summary generation failed";

/// Summary reported when the model's JSON has no `summary` field
pub const MISSING_SUMMARY: &str = "No summary";

/// Summary plus questions as produced by the model.
///
/// `questions` is forwarded exactly as the model wrote it (normally an array
/// of question objects); use [`Question::from_value`] for a typed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub summary: String,
    pub questions: Value,
}

impl QuizResult {
    /// Result used when generation fails
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            questions: Value::Array(Vec::new()),
        }
    }
}

/// Question type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Multiple choice, usually four options
    Choice,
    /// Short answer
    Short,
    /// Essay
    Essay,
}

/// Expected answer: an option index for choice questions, text otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Index(usize),
    Text(String),
}

/// One quiz question in the shape the model is asked to produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based, sequential
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    /// Only present for [`QuestionKind::Choice`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: Answer,
    pub explanation: String,
    /// Free-text page number or keyword hint
    #[serde(rename = "pdfRef")]
    pub pdf_ref: String,
}

impl Question {
    /// Interpret a forwarded question object.
    ///
    /// # Errors
    /// Returns an error if the object does not match the requested shape.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback() {
        let fallback = QuizResult::fallback();
        assert_eq!(fallback.summary, "summary generation failed");
        assert_eq!(fallback.questions, json!([]));
    }

    #[test]
    fn test_typed_view_of_choice_question() {
        let value = json!({
            "id": 1,
            "type": "choice",
            "question": "Which layer routes packets?",
            "options": ["Physical", "Network", "Session", "Application"],
            "answer": 1,
            "explanation": "Routing happens at layer 3.",
            "pdfRef": "p.3, OSI model"
        });

        let question = Question::from_value(&value).unwrap();
        assert_eq!(question.kind, QuestionKind::Choice);
        assert_eq!(question.answer, Answer::Index(1));
        assert_eq!(question.options.as_ref().map(Vec::len), Some(4));
        assert_eq!(question.pdf_ref, "p.3, OSI model");
    }

    #[test]
    fn test_typed_view_of_essay_question() {
        let value = json!({
            "id": 6,
            "type": "essay",
            "question": "Explain congestion control.",
            "answer": "Senders reduce their window when loss is detected.",
            "explanation": "See the TCP section.",
            "pdfRef": "TCP"
        });

        let question = Question::from_value(&value).unwrap();
        assert_eq!(question.kind, QuestionKind::Essay);
        assert!(question.options.is_none());
        assert!(matches!(question.answer, Answer::Text(_)));

        // options stay absent when serialized back
        let back = serde_json::to_value(&question).unwrap();
        assert!(back.get("options").is_none());
        assert_eq!(back["pdfRef"], "TCP");
    }

    #[test]
    fn test_unknown_kind_rejected_by_typed_view() {
        let value = json!({
            "id": 1,
            "type": "matching",
            "question": "?",
            "answer": 0,
            "explanation": "",
            "pdfRef": ""
        });
        assert!(Question::from_value(&value).is_err());
    }
}
