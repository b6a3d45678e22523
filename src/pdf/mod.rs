//! PDF extraction module
//!
//! Text and coordinate extraction via MuPDF. Includes the response types,
//! word grouping, and transcript assembly.

mod extractor;
mod transcript;
mod types;
mod words;

#[cfg(test)]
pub(crate) mod fixtures;

pub use extractor::{PdfError, PdfExtractor};
pub use transcript::{page_header, Transcript};
pub use types::{
    BoundingBox, CharBox, ExtractOptions, ExtractionDetail, ExtractionResult, PageResult, WordBox,
};
pub use words::{group_words, Glyph};
