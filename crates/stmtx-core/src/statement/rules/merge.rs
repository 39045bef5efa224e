//! Reassembly of rows whose description wraps over several lines.

use super::patterns::TRAILING_AMOUNT;
use crate::error::RowError;

/// A row after its wrapped lines have been joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRow {
    /// Joined text, one space between source lines.
    pub text: String,
    /// Index of the opening line.
    pub first_line: usize,
    /// Index of the line holding the amount.
    pub last_line: usize,
}

/// Whether `text` ends with an amount, ignoring trailing whitespace.
pub fn ends_with_amount(text: &str) -> bool {
    TRAILING_AMOUNT.is_match(text)
}

/// Join `lines[start]` with the lines after it until the text ends with an
/// amount.
///
/// Never reads past the end of `lines`; running out of lines first is an
/// [`RowError::Unterminated`] carrying the text gathered so far.
pub fn merge_row<S: AsRef<str>>(lines: &[S], start: usize) -> Result<MergedRow, RowError> {
    let mut text = match lines.get(start) {
        Some(line) => line.as_ref().to_string(),
        None => return Err(RowError::Unterminated(String::new())),
    };

    let mut end = start;
    while !ends_with_amount(&text) {
        end += 1;
        let Some(next) = lines.get(end) else {
            return Err(RowError::Unterminated(text));
        };
        text.push(' ');
        text.push_str(next.as_ref());
    }

    Ok(MergedRow {
        text,
        first_line: start,
        last_line: end,
    })
}
