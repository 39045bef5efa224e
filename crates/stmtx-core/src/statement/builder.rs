//! Accumulation of parsed rows into the output table.

use std::fmt;

use tracing::{debug, trace, warn};

use super::rules::{extract_columns, merge_row, row_starts, YearInferencer};
use crate::error::RowError;
use crate::models::Table;

/// A detected row that was left out of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Page number (1-indexed).
    pub page: u32,
    /// Line number of the row start within the page (1-indexed).
    pub line: usize,
    /// Why the row was skipped.
    pub error: RowError,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}, line {}: {}", self.page, self.line, self.error)
    }
}

/// Result of parsing a whole document.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Every transaction, in document order.
    pub table: Table,
    /// Rows that were detected but could not be parsed.
    pub skipped: Vec<SkippedRow>,
}

/// Builds the table for one document, page by page.
///
/// Owns the year state, so a December anchor found on page one still
/// applies to rows on later pages.
#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
    years: YearInferencer,
    skipped: Vec<SkippedRow>,
}

impl TableBuilder {
    pub fn new(base_year: i32) -> Self {
        Self {
            table: Table::new(),
            years: YearInferencer::new(base_year),
            skipped: Vec::new(),
        }
    }

    /// Parse the lines of the next page. Returns the number of rows added.
    ///
    /// Lines that only continue a wrapped row are still checked as row
    /// starts of their own.
    pub fn push_page<S: AsRef<str>>(&mut self, page: u32, lines: &[S]) -> usize {
        let before = self.table.len();

        for idx in row_starts(lines) {
            let parsed = merge_row(lines, idx).and_then(|row| {
                if row.last_line > row.first_line {
                    trace!(
                        "Page {} lines {}-{} joined: {}",
                        page,
                        row.first_line + 1,
                        row.last_line + 1,
                        row.text
                    );
                }
                extract_columns(&row.text)
            });
            match parsed {
                Ok(cols) => {
                    let year = self.years.year_for(&cols.month);
                    trace!("Page {} line {}: {} -> {}", page, idx + 1, cols.date(), year);
                    self.table.push(cols.with_year(year));
                }
                Err(error) => {
                    let skipped = SkippedRow {
                        page,
                        line: idx + 1,
                        error,
                    };
                    warn!("Skipping row at {}", skipped);
                    self.skipped.push(skipped);
                }
            }
        }

        let added = self.table.len() - before;
        debug!("Page {}: {} lines, {} rows", page, lines.len(), added);
        added
    }

    /// Hand over the finished table.
    pub fn finish(self) -> ParseOutcome {
        ParseOutcome {
            table: self.table,
            skipped: self.skipped,
        }
    }
}
