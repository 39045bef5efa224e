//! Statement document readers.

mod extractor;
mod text;

pub use extractor::PdfExtractor;
pub use text::TextPages;

use crate::error::PdfError;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A document that yields its text one page at a time.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Text lines of a page (1-indexed), top to bottom.
    fn page_lines(&self, page: u32) -> Result<Vec<String>>;
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
