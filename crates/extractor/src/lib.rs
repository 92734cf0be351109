//! Hybrid PDF text extraction
//!
//! Text is taken from each page's native text layer when there is enough of
//! it, and from Tesseract OCR of the rasterized page otherwise. Extraction
//! never fails from the caller's point of view: a document that cannot be
//! opened or read yields an empty string, and a page whose OCR fails
//! contributes an empty string.
//!
//! # Example
//! ```no_run
//! use studia_extractor::{ExtractorConfig, HybridExtractor, TextExtractor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = HybridExtractor::from_config(ExtractorConfig::default())?;
//! let bytes = std::fs::read("lecture.pdf")?;
//! let text = extractor.extract(&bytes);
//! println!("{} chars", text.chars().count());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod ocr;
pub mod pdf;

pub use config::ExtractorConfig;
pub use ocr::{TesseractRecognizer, TextRecognizer};
pub use pdf::{PageSource, PdfOpener, PdfiumOpener};

use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors raised inside the extraction pipeline.
///
/// None of these escape [`TextExtractor::extract`]; they are logged and
/// degraded to empty text.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to bind pdfium library: {0}")]
    Binding(String),

    #[error("Failed to open PDF: {0}")]
    Open(String),

    #[error("Failed to read page {page}: {reason}")]
    Page { page: usize, reason: String },

    #[error("Failed to render page {page}: {reason}")]
    Render { page: usize, reason: String },

    #[error("Failed to initialize Tesseract: {0}")]
    OcrInit(String),

    #[error("Failed to run OCR: {0}")]
    Recognition(String),
}

/// Best-effort conversion of PDF bytes to plain text.
pub trait TextExtractor: Send + Sync {
    /// Extract text from `bytes`, returning an empty string when nothing could be read.
    fn extract(&self, bytes: &[u8]) -> String;
}

/// Where a page's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Native,
    Ocr,
    OcrFailed,
}

/// Text of a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number
    pub page_number: usize,
    pub text: String,
    pub source: TextSource,
}

/// Per-page extraction result in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub pages: Vec<PageText>,
}

impl ExtractedText {
    /// Page texts joined with `\n`
    #[must_use]
    pub fn joined(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of pages whose text came from (or was attempted with) OCR
    #[must_use]
    pub fn ocr_page_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|page| page.source != TextSource::Native)
            .count()
    }
}

/// Native-text-first extractor with OCR fallback for image-only pages.
pub struct HybridExtractor<O, R> {
    opener: O,
    recognizer: R,
    config: ExtractorConfig,
}

impl HybridExtractor<PdfiumOpener, TesseractRecognizer> {
    /// Bind pdfium and verify Tesseract language data.
    ///
    /// # Errors
    /// Returns an error if the pdfium library or the OCR languages are unavailable.
    pub fn from_config(config: ExtractorConfig) -> Result<Self, ExtractError> {
        let opener = PdfiumOpener::bind(config.pdfium_library_path.as_deref())?;
        let recognizer = TesseractRecognizer::new(&config)?;
        info!(
            "Extractor ready: ocr_language={}, ocr_dpi={}, min_native_chars={}",
            config.ocr_language, config.ocr_dpi, config.min_native_chars
        );
        Ok(Self::new(opener, recognizer, config))
    }
}

impl<O: PdfOpener, R: TextRecognizer> HybridExtractor<O, R> {
    pub fn new(opener: O, recognizer: R, config: ExtractorConfig) -> Self {
        Self {
            opener,
            recognizer,
            config,
        }
    }

    /// Extract every page in document order.
    ///
    /// # Errors
    /// A document that cannot be opened, or a page whose text layer cannot be
    /// read or which cannot be rendered, fails the whole document. OCR
    /// failures are recorded as [`TextSource::OcrFailed`] with empty text.
    pub fn extract_pages(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
        let document = self.opener.open(bytes)?;
        let page_count = document.page_count();

        let pages = (0..page_count)
            .map(|index| self.extract_page(document.as_ref(), index, page_count))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ExtractedText { pages })
    }

    fn extract_page(
        &self,
        document: &dyn PageSource,
        index: usize,
        page_count: usize,
    ) -> Result<PageText, ExtractError> {
        let page_number = index + 1;

        let native = document.native_text(index)?;
        if native.trim().chars().count() >= self.config.min_native_chars {
            debug!("Page {}/{}: native text layer", page_number, page_count);
            return Ok(PageText {
                page_number,
                text: native,
                source: TextSource::Native,
            });
        }

        let image = document.render(index, self.config.ocr_dpi)?;

        let page = match self.recognizer.recognize(&image) {
            Ok(text) => {
                debug!(
                    "Page {}/{}: OCR produced {} chars",
                    page_number,
                    page_count,
                    text.chars().count()
                );
                PageText {
                    page_number,
                    text,
                    source: TextSource::Ocr,
                }
            }
            Err(e) => {
                warn!("OCR failed for page {}/{}: {}", page_number, page_count, e);
                PageText {
                    page_number,
                    text: String::new(),
                    source: TextSource::OcrFailed,
                }
            }
        };

        Ok(page)
    }
}

impl<O: PdfOpener, R: TextRecognizer> TextExtractor for HybridExtractor<O, R> {
    fn extract(&self, bytes: &[u8]) -> String {
        match self.extract_pages(bytes) {
            Ok(extracted) => {
                info!(
                    "Extracted {} pages ({} via OCR)",
                    extracted.pages.len(),
                    extracted.ocr_page_count()
                );
                extracted.joined()
            }
            Err(e) => {
                error!("Text extraction failed: {}", e);
                String::new()
            }
        }
    }
}
