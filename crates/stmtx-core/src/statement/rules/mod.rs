//! Rule-based extractors for statement rows.

pub mod columns;
pub mod merge;
pub mod patterns;
pub mod segment;
pub mod year;

pub use columns::{extract_columns, RowColumns};
pub use merge::{ends_with_amount, merge_row, MergedRow};
pub use segment::{is_row_start, row_starts};
pub use year::{YearInferencer, WRAP_MONTH};
