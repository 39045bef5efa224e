//! Plain-text page dumps, as written by `pdftotext`.

use super::{split_lines, PageSource, Result};
use crate::error::PdfError;

/// Form feed, the page separator in text dumps.
const PAGE_BREAK: char = '\u{0c}';

/// In-memory pages of already extracted text.
#[derive(Debug, Clone, Default)]
pub struct TextPages {
    pages: Vec<String>,
}

impl TextPages {
    /// Split a text dump on form feeds. A trailing form feed does not start
    /// a new page.
    pub fn from_text(text: &str) -> Self {
        let body = text.strip_suffix(PAGE_BREAK).unwrap_or(text);
        Self {
            pages: body.split(PAGE_BREAK).map(str::to_string).collect(),
        }
    }

    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageSource for TextPages {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_lines(&self, page: u32) -> Result<Vec<String>> {
        page.checked_sub(1)
            .and_then(|idx| self.pages.get(idx as usize))
            .map(|text| split_lines(text))
            .ok_or(PdfError::InvalidPage(page))
    }
}
