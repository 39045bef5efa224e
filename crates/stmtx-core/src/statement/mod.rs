//! Statement text to transaction table parsing.
//!
//! Each page is scanned for lines that open a row; wrapped rows are joined
//! until they end in an amount, split into columns, and stamped with a year.

mod builder;
pub mod rules;

pub use builder::{ParseOutcome, SkippedRow, TableBuilder};

use tracing::info;

use crate::error::Result;
use crate::pdf::PageSource;

/// Parse every page of `source`, in order, into one table.
///
/// Row problems are collected in the outcome; a page that cannot be read
/// fails the whole document.
pub fn parse_document<S: PageSource + ?Sized>(source: &S, base_year: i32) -> Result<ParseOutcome> {
    parse_document_with(source, base_year, |_, _| {})
}

/// Like [`parse_document`], calling `on_page` with the page number and the
/// rows it added after each page.
pub fn parse_document_with<S, F>(source: &S, base_year: i32, mut on_page: F) -> Result<ParseOutcome>
where
    S: PageSource + ?Sized,
    F: FnMut(u32, usize),
{
    let mut builder = TableBuilder::new(base_year);

    for page in 1..=source.page_count() {
        let lines = source.page_lines(page)?;
        let added = builder.push_page(page, &lines);
        on_page(page, added);
    }

    let outcome = builder.finish();
    info!(
        "Parsed {} transactions, skipped {} rows",
        outcome.table.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}
