//! PDF structural access: native text layer and page rasterization.
//!
//! The extractor only needs three things from a PDF library: the page count,
//! each page's embedded text, and a raster image of a page at a given DPI.
//! [`PdfOpener`] and [`PageSource`] capture exactly that, and
//! [`PdfiumOpener`] implements them on top of `pdfium-render`.

// Page dimensions in points are scaled to pixel counts
#![allow(clippy::cast_possible_truncation)]

use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::debug;

use crate::ExtractError;

/// PDF points per inch (1 point = 1/72 inch).
const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Opens a byte buffer as a paginated document.
pub trait PdfOpener: Send + Sync {
    /// Parse `bytes` as a PDF.
    ///
    /// # Errors
    /// Returns [`ExtractError::Open`] for corrupt or unsupported input.
    fn open<'a>(&'a self, bytes: &'a [u8]) -> Result<Box<dyn PageSource + 'a>, ExtractError>;
}

/// An opened document, addressed by 0-based page index.
pub trait PageSource {
    /// Number of pages in document order
    fn page_count(&self) -> usize;

    /// Text embedded in the page's content stream
    fn native_text(&self, index: usize) -> Result<String, ExtractError>;

    /// Rasterize the page at `dpi`
    fn render(&self, index: usize, dpi: f32) -> Result<DynamicImage, ExtractError>;
}

/// [`PdfOpener`] backed by a bound pdfium library.
pub struct PdfiumOpener {
    pdfium: Pdfium,
}

impl PdfiumOpener {
    /// Bind the pdfium shared library.
    ///
    /// With an explicit directory only that location is tried; otherwise the
    /// current directory is tried first, then the system library.
    ///
    /// # Errors
    /// Returns [`ExtractError::Binding`] if the library cannot be loaded.
    pub fn bind(library_dir: Option<&Path>) -> Result<Self, ExtractError> {
        let bindings = match library_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            }
            None => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library()),
        }
        .map_err(|e| ExtractError::Binding(e.to_string()))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PdfOpener for PdfiumOpener {
    fn open<'a>(&'a self, bytes: &'a [u8]) -> Result<Box<dyn PageSource + 'a>, ExtractError> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(|e| ExtractError::Open(e.to_string()))?;

        debug!(
            "Opened PDF: {} bytes, {} pages",
            bytes.len(),
            document.pages().len()
        );

        Ok(Box::new(PdfiumPages { document }))
    }
}

struct PdfiumPages<'a> {
    document: PdfDocument<'a>,
}

fn page_index(index: usize) -> Result<PdfPageIndex, ExtractError> {
    PdfPageIndex::try_from(index).map_err(|_| ExtractError::Page {
        page: index + 1,
        reason: "page index out of range".to_string(),
    })
}

impl PageSource for PdfiumPages<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn native_text(&self, index: usize) -> Result<String, ExtractError> {
        let page = self
            .document
            .pages()
            .get(page_index(index)?)
            .map_err(|e| ExtractError::Page {
                page: index + 1,
                reason: e.to_string(),
            })?;

        let text = page.text().map_err(|e| ExtractError::Page {
            page: index + 1,
            reason: e.to_string(),
        })?;

        Ok(text.all())
    }

    fn render(&self, index: usize, dpi: f32) -> Result<DynamicImage, ExtractError> {
        let page = self
            .document
            .pages()
            .get(page_index(index)?)
            .map_err(|e| ExtractError::Render {
                page: index + 1,
                reason: e.to_string(),
            })?;

        let scale = dpi / PDF_POINTS_PER_INCH;
        let render_config = PdfRenderConfig::new()
            .set_target_width((page.width().value * scale) as i32)
            .set_target_height((page.height().value * scale) as i32)
            .render_form_data(true)
            .render_annotations(true);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| ExtractError::Render {
                page: index + 1,
                reason: e.to_string(),
            })?;

        Ok(bitmap.as_image())
    }
}
