//! Column extraction from a merged row.

use super::patterns::ROW_COLUMNS;
use crate::error::RowError;
use crate::models::Transaction;

/// Columns of a row before a year is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowColumns {
    /// Month abbreviation of the transaction date, e.g. `JAN`.
    pub month: String,
    /// Day of the transaction date as printed.
    pub day: String,
    /// Description with whitespace runs collapsed.
    pub description: String,
    /// Literal amount token.
    pub amount: String,
}

impl RowColumns {
    /// Month and day, e.g. `JAN 5`.
    pub fn date(&self) -> String {
        format!("{} {}", self.month, self.day)
    }

    /// Stamp the date with `year`.
    pub fn with_year(self, year: i32) -> Transaction {
        Transaction::new(
            format!("{},{}", self.date(), year),
            self.description,
            self.amount,
        )
    }
}

/// Split a merged row into its columns.
///
/// The posting date is matched but not kept.
pub fn extract_columns(row: &str) -> Result<RowColumns, RowError> {
    let caps = ROW_COLUMNS
        .captures(row)
        .ok_or_else(|| RowError::Unparsed(row.to_string()))?;

    let mut date = caps["date"].split_whitespace();
    let (Some(month), Some(day)) = (date.next(), date.next()) else {
        return Err(RowError::Unparsed(row.to_string()));
    };

    Ok(RowColumns {
        month: month.to_string(),
        day: day.to_string(),
        description: caps["desc"].split_whitespace().collect::<Vec<_>>().join(" "),
        amount: caps["amount"].to_string(),
    })
}
