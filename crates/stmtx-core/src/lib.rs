//! Core library for statement transaction extraction.
//!
//! This crate provides:
//! - Page text from PDF statements (including empty-password encryption)
//!   and from plain-text page dumps
//! - Rule-based row detection, wrapped-row merging and column extraction
//! - Year inference for month/day dates
//! - The transaction table and its CSV encoding

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{OutputError, PdfError, Result, RowError, StmtError};
pub use models::{output_path_for, StmtConfig, Table, TableSummary, Transaction};
pub use pdf::{PageSource, PdfExtractor, TextPages};
pub use statement::{
    parse_document, parse_document_with, ParseOutcome, SkippedRow, TableBuilder,
};
