//! Regex patterns for statement rows.
//!
//! Rows look like `JAN 5 JAN 6 COFFEE SHOP PURCHASE $4.50`: transaction
//! date, posting date, description, amount.

use lazy_static::lazy_static;
use regex::Regex;

/// Month abbreviation and day, e.g. `JAN 5`.
const DATE: &str = r"[A-Z]{3}\s+\d+";

/// Dollar amount with optional sign, thousands separators and fraction,
/// e.g. `-$1,234.56`.
const AMOUNT: &str = r"-?\$(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?";

lazy_static! {
    /// Two dates followed by more text, anywhere in the line.
    pub static ref ROW_START: Regex = Regex::new(
        &format!(r"{DATE}\s+{DATE}\s")
    ).unwrap();

    /// An amount closing the text, trailing whitespace allowed.
    pub static ref TRAILING_AMOUNT: Regex = Regex::new(
        &format!(r"{AMOUNT}\s*$")
    ).unwrap();

    /// Full row: transaction date, posting date (dropped), description, amount.
    /// Text before the first date is not part of any column.
    pub static ref ROW_COLUMNS: Regex = Regex::new(
        &format!(r"(?P<date>{DATE})\s+{DATE}\s+(?P<desc>\S.*?)\s+(?P<amount>{AMOUNT})\s*$")
    ).unwrap();
}
