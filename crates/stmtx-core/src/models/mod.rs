//! Data models.

pub mod config;
pub mod table;
pub mod transaction;

pub use config::StmtConfig;
pub use table::{output_path_for, Table, TableSummary, HEADER};
pub use transaction::Transaction;
