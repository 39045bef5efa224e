//! Row start detection.

use super::patterns::ROW_START;

/// Whether `line` opens a transaction row.
///
/// Headers, totals, balances and blank lines all fail this test and are
/// ignored.
pub fn is_row_start(line: &str) -> bool {
    ROW_START.is_match(line)
}

/// Indices of the row-opening lines of a page.
pub fn row_starts<S: AsRef<str>>(lines: &[S]) -> impl Iterator<Item = usize> + '_ {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_row_start(line.as_ref()))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_start_lines() {
        assert!(is_row_start("JAN 5 JAN 6 COFFEE SHOP PURCHASE $4.50"));
        assert!(is_row_start("  DEC 31   JAN 2   AMAZON.COM"));
        assert!(is_row_start("JAN 10 JAN 11 "));
    }

    #[test]
    fn test_dates_after_prefix() {
        assert!(is_row_start("* JAN 5 JAN 6 COFFEE $4.50"));
        assert!(is_row_start("1 JAN 7 JAN 8 TEA $3.00"));
        assert!(is_row_start("ONLINE ORDER JAN 5 JAN 6 $23.10"));
    }

    #[test]
    fn test_other_lines_ignored() {
        assert!(!is_row_start("Page 2 of 5"));
        assert!(!is_row_start("Total: $120.00"));
        assert!(!is_row_start(""));
        assert!(!is_row_start("TRANSACTION POSTING"));
        assert!(!is_row_start("JAN 5 JAN 6"));
        assert!(!is_row_start("Jan 5 Jan 6 lowercase months"));
        assert!(!is_row_start("STATEMENT DATE JAN 5"));
    }

    #[test]
    fn test_row_starts() {
        let lines = [
            "STATEMENT PERIOD",
            "JAN 5 JAN 6 COFFEE $4.50",
            "Page 1 of 2",
            "JAN 7 JAN 8 BOOKS",
            "ONLINE $9.99",
        ];
        assert_eq!(row_starts(&lines).collect::<Vec<_>>(), vec![1, 3]);
    }
}
