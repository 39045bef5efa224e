//! Error types for the stmtx-core library.

use thiserror::Error;

/// Main error type for the stmtx library.
#[derive(Error, Debug)]
pub enum StmtError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading a statement document.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and the configured password did not open it.
    #[error("could not decrypt PDF file: {0}")]
    Encrypted(String),

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// Failed to extract page text.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),
}

/// A row that was detected but could not be turned into a transaction.
///
/// These never abort a run; the offending row is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The page ran out of lines before the row reached a trailing amount.
    #[error("row has no trailing amount before the end of the page: '{0}'")]
    Unterminated(String),

    /// The merged row did not match the column pattern.
    #[error("could not parse the row: '{0}'")]
    Unparsed(String),
}

/// Errors raised while writing or reading the output table.
#[derive(Error, Debug)]
pub enum OutputError {
    /// I/O error on the destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited encoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The finished temporary file could not be moved over the destination.
    #[error("failed to persist output: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// A table read back from disk did not start with the expected header.
    #[error("unexpected table header: {0:?}")]
    Header(Vec<String>),
}

/// Result type for the stmtx library.
pub type Result<T> = std::result::Result<T, StmtError>;
