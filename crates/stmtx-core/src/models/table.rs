//! The output table and its delimited-file encoding.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::transaction::Transaction;
use crate::error::OutputError;

/// Fixed first row of every table.
pub const HEADER: [&str; 3] = ["Date", "Description", "Amount"];

/// Header plus transactions in document order.
///
/// The header is implicit; `len` and `transactions` only count real rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Transaction>,
}

/// Totals reported after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    /// Number of transaction rows (header excluded).
    pub transactions: usize,
    /// Sum of all amounts that parse as numbers.
    pub net_total: Decimal,
    /// Date of the first row, if it parses.
    pub first_date: Option<NaiveDate>,
    /// Date of the last row, if it parses.
    pub last_date: Option<NaiveDate>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, txn: Transaction) {
        self.rows.push(txn);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every output record, header first.
    pub fn records(&self) -> impl Iterator<Item = [&str; 3]> + '_ {
        std::iter::once(HEADER).chain(self.rows.iter().map(Transaction::record))
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            transactions: self.rows.len(),
            net_total: self.rows.iter().filter_map(Transaction::amount_value).sum(),
            first_date: self.rows.first().and_then(Transaction::parsed_date),
            last_date: self.rows.last().and_then(Transaction::parsed_date),
        }
    }

    /// Write the table as delimited records with standard quoting.
    pub fn write_to<W: Write>(&self, writer: W, delimiter: u8) -> Result<(), OutputError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        for record in self.records() {
            wtr.write_record(record)?;
        }
        wtr.flush()?;

        Ok(())
    }

    /// Read a table previously written by [`Table::write_to`].
    pub fn read_from<R: Read>(reader: R, delimiter: u8) -> Result<Self, OutputError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .from_reader(reader);

        let mut records = rdr.records();
        let header = match records.next() {
            Some(record) => record?,
            None => return Err(OutputError::Header(Vec::new())),
        };
        if header.iter().ne(HEADER) {
            return Err(OutputError::Header(header.iter().map(String::from).collect()));
        }

        let mut table = Table::new();
        for result in records {
            let record = result?;
            if record.len() != HEADER.len() {
                return Err(OutputError::Header(record.iter().map(String::from).collect()));
            }
            table.push(Transaction::new(&record[0], &record[1], &record[2]));
        }

        Ok(table)
    }

    /// Write the table to `path`, replacing any existing file.
    ///
    /// Data goes to a temporary file in the same directory first, so a failed
    /// write never leaves a truncated table at `path`.
    pub fn save(&self, path: &Path, delimiter: u8) -> Result<(), OutputError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        self.write_to(&mut tmp, delimiter)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)?;

        debug!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}

/// Output path beside `input`: same base name, new extension.
pub fn output_path_for(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}
