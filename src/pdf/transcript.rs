//! Plain-text transcript assembly

/// Header written before each page's text
pub fn page_header(page_number: u32) -> String {
    format!("--- Page {} ---", page_number)
}

/// Running transcript of a document
#[derive(Debug, Default)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page's text. Pages without text leave no trace.
    pub fn push_page(&mut self, page_number: u32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.text.push_str(&page_header(page_number));
        self.text.push('\n');
        self.text.push_str(text);
        self.text.push_str("\n\n");
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
