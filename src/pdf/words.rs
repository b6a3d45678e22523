//! Word grouping
//!
//! Groups positioned glyphs into words. Glyphs arrive one text line at a time
//! in the order the PDF library reports them; words never span lines.

use super::types::{BoundingBox, CharBox, WordBox};

/// One positioned character reported by the PDF library
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub bbox: BoundingBox,
    pub size: f32,
}

impl Glyph {
    pub fn to_char_box(&self) -> CharBox {
        CharBox {
            text: self.ch.to_string(),
            x0: self.bbox.x0,
            y0: self.bbox.y0,
            x1: self.bbox.x1,
            y1: self.bbox.y1,
            fontname: String::new(),
            size: self.size,
        }
    }
}

/// Accumulates glyphs of a word in progress
#[derive(Default)]
struct WordBuilder {
    text: String,
    bbox: Option<BoundingBox>,
}

impl WordBuilder {
    fn push(&mut self, glyph: &Glyph) {
        self.text.push(glyph.ch);
        self.bbox = Some(match self.bbox {
            Some(bbox) => bbox.union(&glyph.bbox),
            None => glyph.bbox,
        });
    }

    fn right_edge(&self) -> Option<f32> {
        self.bbox.map(|b| b.x1)
    }

    fn finish(&mut self, words: &mut Vec<WordBox>) {
        if let Some(bbox) = self.bbox.take() {
            words.push(WordBox::new(std::mem::take(&mut self.text), bbox));
        }
    }
}

/// Split one line of glyphs into words
///
/// Whitespace glyphs end a word. So does a horizontal gap wider than
/// `gap_tolerance` between a glyph and the word being built.
pub fn group_line(glyphs: &[Glyph], gap_tolerance: f32, words: &mut Vec<WordBox>) {
    let mut current = WordBuilder::default();

    for glyph in glyphs {
        if glyph.ch.is_whitespace() {
            current.finish(words);
            continue;
        }

        if let Some(right) = current.right_edge() {
            if glyph.bbox.x0 - right > gap_tolerance {
                current.finish(words);
            }
        }

        current.push(glyph);
    }

    current.finish(words);
}

/// Group every line of a page into words, preserving line order
pub fn group_words(lines: &[Vec<Glyph>], gap_tolerance: f32) -> Vec<WordBox> {
    let mut words = Vec::new();
    for line in lines {
        group_line(line, gap_tolerance, &mut words);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Glyphs laid out left to right, 5pt wide, on a single baseline
    fn line(text: &str, start_x: f32) -> Vec<Glyph> {
        text.chars()
            .enumerate()
            .map(|(i, ch)| {
                let x0 = start_x + i as f32 * 5.0;
                Glyph {
                    ch,
                    bbox: BoundingBox::new(x0, 700.0, x0 + 5.0, 710.0),
                    size: 10.0,
                }
            })
            .collect()
    }

    fn texts(words: &[WordBox]) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_splits_on_whitespace() {
        let words = group_words(&[line("Hello World", 72.0)], 3.0);
        assert_eq!(texts(&words), vec!["Hello", "World"]);
        assert_eq!(words[0].x0, 72.0);
        assert_eq!(words[0].x1, 97.0);
        assert_eq!(words[1].x0, 102.0);
    }

    #[test]
    fn test_splits_on_horizontal_gap() {
        let mut glyphs = line("ab", 72.0);
        glyphs.extend(line("cd", 100.0));
        let words = group_words(&[glyphs], 3.0);
        assert_eq!(texts(&words), vec!["ab", "cd"]);
    }

    #[test]
    fn test_small_gap_stays_in_word() {
        let mut glyphs = line("ab", 72.0);
        glyphs.extend(line("cd", 84.0));
        let words = group_words(&[glyphs], 3.0);
        assert_eq!(texts(&words), vec!["abcd"]);
    }

    #[test]
    fn test_words_do_not_span_lines() {
        let words = group_words(&[line("end", 72.0), line("start", 87.0)], 3.0);
        assert_eq!(texts(&words), vec!["end", "start"]);
    }

    #[test]
    fn test_whitespace_only_line_yields_nothing() {
        let words = group_words(&[line("   ", 72.0), Vec::new()], 3.0);
        assert!(words.is_empty());
    }

    #[test]
    fn test_word_box_is_union_of_glyphs() {
        let mut glyphs = line("ab", 72.0);
        glyphs[1].bbox = BoundingBox::new(77.0, 698.0, 82.0, 714.0);
        let words = group_words(&[glyphs], 3.0);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].y0, 698.0);
        assert_eq!(words[0].y1, 714.0);
        assert_eq!(words[0].width, words[0].x1 - words[0].x0);
        assert_eq!(words[0].height, words[0].y1 - words[0].y0);
    }

    #[test]
    fn test_glyph_to_char_box() {
        let glyph = &line("Q", 10.0)[0];
        let char_box = glyph.to_char_box();
        assert_eq!(char_box.text, "Q");
        assert_eq!(char_box.x0, 10.0);
        assert_eq!(char_box.size, 10.0);
        assert!(char_box.fontname.is_empty());
    }
}
