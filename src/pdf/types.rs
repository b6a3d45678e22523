//! PDF extraction types
//!
//! Response shapes for extracted text and coordinate detail. All coordinates
//! are in PDF page space: `x` grows rightward from the left edge, `y` grows
//! upward from the bottom edge.

use serde::{Deserialize, Serialize};

/// How much detail an extraction produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionDetail {
    /// Transcript only
    Text,
    /// Transcript plus per-page word and character boxes
    #[default]
    Coordinates,
}

impl std::str::FromStr for ExtractionDetail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "coordinates" | "coords" => Ok(Self::Coordinates),
            other => Err(format!("unknown extraction detail '{}'", other)),
        }
    }
}

/// Options for a single extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Response shape
    pub detail: ExtractionDetail,
    /// Maximum characters reported per page
    pub char_limit: usize,
    /// Horizontal gap (points) that splits two glyphs into separate words
    pub word_gap_tolerance: f32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            detail: ExtractionDetail::Coordinates,
            char_limit: 100,
            word_gap_tolerance: 3.0,
        }
    }
}

/// Axis-aligned rectangle `(x0, y0)`-`(x1, y1)` with `x0 <= x1`, `y0 <= y1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Smallest box enclosing both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// A word with its bounding box
///
/// `width` and `height` are derived from the corners when the word is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordBox {
    pub text: String,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub width: f32,
    pub height: f32,
}

impl WordBox {
    pub fn new(text: String, bbox: BoundingBox) -> Self {
        Self {
            text,
            x0: bbox.x0,
            y0: bbox.y0,
            x1: bbox.x1,
            y1: bbox.y1,
            width: bbox.width(),
            height: bbox.height(),
        }
    }
}

/// A single character with position and font information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharBox {
    pub text: String,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Font name, empty when the PDF library does not report one
    pub fontname: String,
    /// Font size in points
    pub size: f32,
}

/// Coordinate detail for one page
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    /// 1-based page number
    #[serde(rename = "page")]
    pub page_number: u32,
    #[serde(rename = "page_width")]
    pub width: f32,
    #[serde(rename = "page_height")]
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub words: Vec<WordBox>,
    pub characters: Vec<CharBox>,
}

/// Successful extraction response
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub success: bool,
    /// Transcript of all pages with `--- Page N ---` headers
    pub text: String,
    /// Document page count, including pages without text
    pub pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<PageResult>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_normalizes_corners() {
        let bbox = BoundingBox::new(10.0, 20.0, 5.0, 8.0);
        assert_eq!(bbox.x0, 5.0);
        assert_eq!(bbox.y0, 8.0);
        assert_eq!(bbox.x1, 10.0);
        assert_eq!(bbox.y1, 20.0);
    }

    #[test]
    fn test_word_box_dimensions_follow_corners() {
        let word = WordBox::new("hello".into(), BoundingBox::new(72.5, 700.25, 98.0, 712.0));
        assert_eq!(word.width, word.x1 - word.x0);
        assert_eq!(word.height, word.y1 - word.y0);
    }

    #[test]
    fn test_page_result_field_names() {
        let page = PageResult {
            page_number: 1,
            width: 612.0,
            height: 792.0,
            text: None,
            words: Vec::new(),
            characters: Vec::new(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["page"], 1);
        assert_eq!(json["page_width"], 612.0);
        assert_eq!(json["page_height"], 792.0);
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_text_only_result_omits_coordinates() {
        let result = ExtractionResult {
            success: true,
            text: String::new(),
            pages: 3,
            coordinates: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["pages"], 3);
        assert!(json.get("coordinates").is_none());
    }

    #[test]
    fn test_extraction_detail_from_str() {
        assert_eq!("text".parse::<ExtractionDetail>(), Ok(ExtractionDetail::Text));
        assert_eq!(
            "Coordinates".parse::<ExtractionDetail>(),
            Ok(ExtractionDetail::Coordinates)
        );
        assert!("full".parse::<ExtractionDetail>().is_err());
    }
}
