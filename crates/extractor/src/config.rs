//! Configuration for hybrid text extraction

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Minimum trimmed character count for a page's native text to be trusted.
/// Pages below this are treated as image-only and sent to OCR.
pub const MIN_NATIVE_CHARS: usize = 50;

/// Resolution used when rasterizing a page for OCR.
pub const DEFAULT_OCR_DPI: f32 = 300.0;

/// Tesseract language hint (Korean + English).
pub const DEFAULT_OCR_LANGUAGE: &str = "kor+eng";

/// Settings for [`crate::HybridExtractor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Native text shorter than this (after trimming, in characters) triggers OCR
    pub min_native_chars: usize,

    /// Rasterization resolution for OCR pages
    pub ocr_dpi: f32,

    /// Tesseract language codes (e.g., "kor+eng")
    pub ocr_language: String,

    /// Directory holding `*.traineddata`; `None` uses Tesseract's default lookup
    #[serde(default)]
    pub tessdata_path: Option<String>,

    /// Directory containing the pdfium shared library; `None` tries `./` then the system library
    #[serde(default)]
    pub pdfium_library_path: Option<PathBuf>,
}

impl ExtractorConfig {
    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `OCR_MIN_NATIVE_CHARS`: native text threshold (default: 50)
    /// - `OCR_DPI`: rasterization DPI (default: 300)
    /// - `OCR_LANGUAGE`: Tesseract languages (default: "kor+eng")
    /// - `TESSDATA_PREFIX`: Tesseract data directory (default: unset)
    /// - `PDFIUM_LIBRARY_PATH`: directory of the pdfium library (default: unset)
    #[must_use = "creates config from environment variables"]
    pub fn from_env() -> Self {
        let min_native_chars = env::var("OCR_MIN_NATIVE_CHARS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(MIN_NATIVE_CHARS);

        let ocr_dpi = env::var("OCR_DPI")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|dpi: &f32| *dpi > 0.0)
            .unwrap_or(DEFAULT_OCR_DPI);

        let ocr_language =
            env::var("OCR_LANGUAGE").unwrap_or_else(|_| DEFAULT_OCR_LANGUAGE.to_string());

        let tessdata_path = env::var("TESSDATA_PREFIX").ok().filter(|s| !s.is_empty());

        let pdfium_library_path = env::var("PDFIUM_LIBRARY_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            min_native_chars,
            ocr_dpi,
            ocr_language,
            tessdata_path,
            pdfium_library_path,
        }
    }
}

impl Default for ExtractorConfig {
    #[inline]
    fn default() -> Self {
        Self {
            min_native_chars: MIN_NATIVE_CHARS,
            ocr_dpi: DEFAULT_OCR_DPI,
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
            tessdata_path: None,
            pdfium_library_path: None,
        }
    }
}
