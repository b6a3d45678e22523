//! PDF extraction using MuPDF
//!
//! Walks a document page by page through MuPDF's structured text API,
//! producing the plain-text transcript and, when requested, word and
//! character boxes.
//!
//! MuPDF reports positions in device space (origin top-left, y down). Boxes
//! are flipped against the page bounds so `y` grows upward from the bottom
//! edge, matching PDF user space.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use mupdf::{Document, Page, Rect, TextPageOptions};
use thiserror::Error;

use super::transcript::Transcript;
use super::types::{BoundingBox, ExtractOptions, ExtractionDetail, ExtractionResult, PageResult};
use super::words::{group_words, Glyph};

/// PDF extraction errors
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to load PDF: {0}")]
    LoadError(String),
    #[error("Not a PDF document (missing %PDF header)")]
    NotPdf,
    #[error("Failed to load page {0}: {1}")]
    PageError(u32, String),
    #[error("MuPDF error: {0}")]
    MuPdfError(String),
}

impl From<mupdf::Error> for PdfError {
    fn from(e: mupdf::Error) -> Self {
        PdfError::MuPdfError(e.to_string())
    }
}

/// PDF readers accept the header anywhere in the first 1024 bytes
const HEADER_SEARCH_LEN: usize = 1024;

/// Whether `bytes` carry a `%PDF` header within the search window
pub fn has_pdf_header(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(HEADER_SEARCH_LEN)]
        .windows(4)
        .any(|w| w == b"%PDF")
}

/// Check the file's magic bytes; MuPDF would otherwise open images, EPUB
/// or XPS with their own handlers
fn ensure_pdf(path: &Path) -> Result<(), PdfError> {
    let mut head = Vec::with_capacity(HEADER_SEARCH_LEN);
    File::open(path)
        .and_then(|f| f.take(HEADER_SEARCH_LEN as u64).read_to_end(&mut head))
        .map_err(|e| PdfError::LoadError(e.to_string()))?;

    if has_pdf_header(&head) {
        Ok(())
    } else {
        Err(PdfError::NotPdf)
    }
}

/// Text and glyphs read from one page
#[derive(Default)]
struct PageContent {
    text: Option<String>,
    lines: Vec<Vec<Glyph>>,
}

/// Synchronous MuPDF extractor
///
/// MuPDF's context is not thread-safe and its documents are not `Send`, so
/// callers run `extract_path` on a blocking thread and the document never
/// leaves that call.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    options: ExtractOptions,
}

impl PdfExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Open the PDF at `path` and extract every page in document order
    pub fn extract_path<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionResult, PdfError> {
        ensure_pdf(path.as_ref())?;
        let path_str = path.as_ref().to_string_lossy();
        let doc = Document::open(&*path_str).map_err(|e| PdfError::LoadError(e.to_string()))?;
        self.extract_document(&doc)
    }

    fn extract_document(&self, doc: &Document) -> Result<ExtractionResult, PdfError> {
        let page_count = doc.page_count()? as usize;
        let with_coordinates = self.options.detail == ExtractionDetail::Coordinates;

        let mut transcript = Transcript::new();
        let mut coordinates = Vec::with_capacity(if with_coordinates { page_count } else { 0 });

        for index in 0..page_count {
            let page_number = index as u32 + 1;
            let page = doc
                .load_page(index as i32)
                .map_err(|e| PdfError::PageError(page_number, e.to_string()))?;
            let bounds = page
                .bounds()
                .map_err(|e| PdfError::PageError(page_number, e.to_string()))?;

            let content = match read_page_content(&page, &bounds, with_coordinates) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(page = page_number, error = %e, "No text extracted from page");
                    PageContent::default()
                }
            };

            if let Some(text) = &content.text {
                transcript.push_page(page_number, text);
            }

            if with_coordinates {
                coordinates.push(self.page_result(page_number, &bounds, content));
            }
        }

        tracing::debug!(pages = page_count, "PDF extraction complete");

        Ok(ExtractionResult {
            success: true,
            text: transcript.into_string(),
            pages: page_count,
            coordinates: with_coordinates.then_some(coordinates),
        })
    }

    fn page_result(&self, page_number: u32, bounds: &Rect, content: PageContent) -> PageResult {
        let words = group_words(&content.lines, self.options.word_gap_tolerance);
        let characters = content
            .lines
            .iter()
            .flatten()
            .take(self.options.char_limit)
            .map(Glyph::to_char_box)
            .collect();

        PageResult {
            page_number,
            width: bounds.x1 - bounds.x0,
            height: bounds.y1 - bounds.y0,
            text: content.text,
            words,
            characters,
        }
    }
}

/// Read a page's plain text and, optionally, its positioned glyphs
fn read_page_content(page: &Page, bounds: &Rect, with_glyphs: bool) -> Result<PageContent, PdfError> {
    let text_page = page.to_text_page(TextPageOptions::empty())?;

    let text = text_page.to_text()?;
    let text = text.trim_end();

    let mut lines = Vec::new();
    if with_glyphs {
        for block in text_page.blocks() {
            for line in block.lines() {
                let glyphs: Vec<Glyph> = line
                    .chars()
                    .filter_map(|ch| {
                        let c = ch.char()?;
                        let quad = ch.quad();

                        // MuPDF quads: ul, ur, ll, lr corners in device space
                        let left = quad.ul.x.min(quad.ll.x);
                        let right = quad.ur.x.max(quad.lr.x);
                        let top = quad.ul.y.min(quad.ur.y);
                        let bottom = quad.ll.y.max(quad.lr.y);

                        Some(Glyph {
                            ch: c,
                            bbox: BoundingBox::new(
                                left - bounds.x0,
                                bounds.y1 - bottom,
                                right - bounds.x0,
                                bounds.y1 - top,
                            ),
                            size: ch.size(),
                        })
                    })
                    .collect();

                if !glyphs.is_empty() {
                    lines.push(glyphs);
                }
            }
        }
    }

    Ok(PageContent {
        text: (!text.trim().is_empty()).then(|| text.to_string()),
        lines,
    })
}
