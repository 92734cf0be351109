//! Request errors and their HTTP mapping

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::types::ErrorResponse;

/// Errors that reject an upload before the pipeline runs
#[derive(Error, Debug)]
pub enum ApiError {
    /// Declared content type is not exactly `application/pdf`
    #[error("Only PDF files can be uploaded.")]
    UnsupportedMediaType(Option<String>),

    #[error("Missing multipart field `file`")]
    MissingFile,

    #[error("Failed to read upload: {0}")]
    Multipart(#[from] MultipartError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingFile => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Multipart(e) => e.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::UnsupportedMediaType(declared) => warn!(
                "Rejected upload with content type {}",
                declared.as_deref().unwrap_or("<none>")
            ),
            other => warn!("Rejected upload: {}", other),
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::UnsupportedMediaType(Some("text/plain".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::UnsupportedMediaType(None).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingFile.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_detail_message() {
        let err = ApiError::UnsupportedMediaType(Some("image/png".to_string()));
        assert_eq!(err.to_string(), "Only PDF files can be uploaded.");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
