//! Statement transaction model.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One year-stamped statement transaction.
///
/// All fields keep the text as printed on the statement; `date` is
/// `"MMM D,YYYY"` once the year has been inferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction date, e.g. `JAN 5,2023`.
    pub date: String,

    /// Merchant or payee description.
    pub description: String,

    /// Literal amount token, e.g. `-$1,234.56`.
    pub amount: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Fields in output column order.
    pub fn record(&self) -> [&str; 3] {
        [&self.date, &self.description, &self.amount]
    }

    /// Calendar date, if the stamped date is a real one.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%b %d,%Y").ok()
    }

    /// Numeric value of the amount token.
    ///
    /// The currency symbol and thousands separators are dropped; a leading
    /// minus is kept.
    pub fn amount_value(&self) -> Option<Decimal> {
        let cleaned: String = self
            .amount
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        Decimal::from_str(&cleaned).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_date() {
        let txn = Transaction::new("JAN 5,2023", "COFFEE", "$4.50");
        assert_eq!(txn.parsed_date(), NaiveDate::from_ymd_opt(2023, 1, 5));

        let txn = Transaction::new("XYZ 5,2023", "COFFEE", "$4.50");
        assert_eq!(txn.parsed_date(), None);
    }

    #[test]
    fn test_amount_value() {
        let txn = Transaction::new("JAN 5,2023", "RENT", "$1,234.56");
        assert_eq!(txn.amount_value(), Some(Decimal::from_str("1234.56").unwrap()));

        let txn = Transaction::new("JAN 5,2023", "REFUND", "-$12.00");
        assert_eq!(txn.amount_value(), Some(Decimal::from_str("-12.00").unwrap()));

        let txn = Transaction::new("JAN 5,2023", "FEE", "$7");
        assert_eq!(txn.amount_value(), Some(Decimal::from(7)));
    }
}
