//! API request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use studia_quiz::QuizResult;

/// The only accepted upload content type
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Multipart field carrying the document
pub const UPLOAD_FIELD: &str = "file";

pub const MESSAGE_SUCCESS: &str = "Quiz generated successfully";
pub const MESSAGE_EXTRACTION_FAILED: &str = "Text extraction failed";

/// Upload as received from the client, held only for one request
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub content_type: String,
    pub bytes: axum::body::Bytes,
}

/// Body of every `POST /upload` response with status 200
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    /// Success confirmation, extraction-failure notice, or error notice
    pub message: String,
    pub text_summary: String,
    /// Question objects as produced by the model
    pub questions: Value,
}

impl UploadResponse {
    pub fn generated(filename: String, quiz: QuizResult) -> Self {
        Self {
            filename,
            message: MESSAGE_SUCCESS.to_string(),
            text_summary: quiz.summary,
            questions: quiz.questions,
        }
    }

    pub fn extraction_failed(filename: String) -> Self {
        Self {
            filename,
            message: MESSAGE_EXTRACTION_FAILED.to_string(),
            text_summary: String::new(),
            questions: Value::Array(Vec::new()),
        }
    }

    pub fn failed(filename: String, error: &dyn Display) -> Self {
        Self {
            filename,
            message: format!("Error occurred: {error}"),
            text_summary: String::new(),
            questions: Value::Array(Vec::new()),
        }
    }
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_response_shape() {
        let quiz = QuizResult {
            summary: "Summary.".to_string(),
            questions: json!([{"id": 1, "type": "short"}]),
        };
        let response = UploadResponse::generated("notes.pdf".to_string(), quiz);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "filename": "notes.pdf",
                "message": "Quiz generated successfully",
                "text_summary": "Summary.",
                "questions": [{"id": 1, "type": "short"}]
            })
        );
    }

    #[test]
    fn test_degraded_responses_are_empty() {
        let response = UploadResponse::extraction_failed("scan.pdf".to_string());
        assert_eq!(response.message, "Text extraction failed");
        assert!(response.text_summary.is_empty());
        assert_eq!(response.questions, json!([]));

        let response = UploadResponse::failed("scan.pdf".to_string(), &"worker crashed");
        assert_eq!(response.message, "Error occurred: worker crashed");
        assert!(response.text_summary.is_empty());
        assert_eq!(response.questions, json!([]));
    }
}
