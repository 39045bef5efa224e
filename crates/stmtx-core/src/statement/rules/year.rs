//! Year inference for month/day dates.
//!
//! Statements print dates without a year. The caller supplies the year the
//! statement starts in; the month of the first parsed row becomes the
//! anchor. A statement anchored in December that reaches another month has
//! crossed into the next year. No other wrap is detected: a statement that
//! starts in November and runs into January keeps the base year throughout.

/// Anchor month after which other months belong to the next year.
pub const WRAP_MONTH: &str = "DEC";

/// Per-document year state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearInferencer {
    base_year: i32,
    anchor_month: Option<String>,
}

impl YearInferencer {
    pub fn new(base_year: i32) -> Self {
        Self {
            base_year,
            anchor_month: None,
        }
    }

    /// Month of the first row seen, once there is one.
    pub fn anchor_month(&self) -> Option<&str> {
        self.anchor_month.as_deref()
    }

    /// Year for a row in `month`. The first call fixes the anchor.
    pub fn year_for(&mut self, month: &str) -> i32 {
        let Some(anchor) = self.anchor_month.as_deref() else {
            self.anchor_month = Some(month.to_string());
            return self.base_year;
        };

        if anchor == WRAP_MONTH && month != anchor {
            self.base_year.saturating_add(1)
        } else {
            self.base_year
        }
    }
}
