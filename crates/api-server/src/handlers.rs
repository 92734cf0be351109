//! HTTP request handlers for API endpoints

use axum::{extract::Multipart, extract::State, response::IntoResponse, Json};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    error::ApiError,
    types::{HealthResponse, UploadResponse, UploadedDocument, PDF_MEDIA_TYPE, UPLOAD_FIELD},
    ApiState,
};

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Read the `file` field, rejecting anything not declared as a PDF before
/// its body is read.
async fn read_upload(multipart: &mut Multipart) -> Result<UploadedDocument, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        if content_type.as_deref() != Some(PDF_MEDIA_TYPE) {
            return Err(ApiError::UnsupportedMediaType(content_type));
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        return Ok(UploadedDocument {
            filename,
            content_type: PDF_MEDIA_TYPE.to_string(),
            bytes,
        });
    }

    Err(ApiError::MissingFile)
}

/// Upload a PDF and generate a quiz from its text
///
/// Only a non-PDF upload is rejected with an error status. Extraction and
/// generation failures are reported through `message` with status 200.
pub async fn upload_and_generate(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("upload", %request_id);

    async move {
        let upload = read_upload(&mut multipart).await?;
        info!(
            "Received upload: filename={}, content_type={}, bytes={}",
            upload.filename,
            upload.content_type,
            upload.bytes.len()
        );

        Ok::<_, ApiError>(Json(process_upload(&state, upload).await))
    }
    .instrument(span)
    .await
}

async fn process_upload(state: &ApiState, upload: UploadedDocument) -> UploadResponse {
    let UploadedDocument {
        filename, bytes, ..
    } = upload;

    // PDF parsing and OCR are CPU-bound
    let extractor = state.extractor.clone();
    let text = match tokio::task::spawn_blocking(move || extractor.extract(&bytes)).await {
        Ok(text) => text,
        Err(e) => {
            error!("Extraction worker failed: {}", e);
            return UploadResponse::failed(filename, &e);
        }
    };

    if text.is_empty() {
        warn!("No text extracted from {}", filename);
        return UploadResponse::extraction_failed(filename);
    }
    info!("Extracted {} chars from {}", text.chars().count(), filename);

    let generator = state.generator.clone();
    match tokio::spawn(async move { generator.generate(&text).await }).await {
        Ok(Ok(quiz)) => UploadResponse::generated(filename, quiz),
        Ok(Err(e)) => {
            error!("Unusable quiz reply: {}", e);
            UploadResponse::failed(filename, &e)
        }
        Err(e) => {
            error!("Quiz generation task failed: {}", e);
            UploadResponse::failed(filename, &e)
        }
    }
}
