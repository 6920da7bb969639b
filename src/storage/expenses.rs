//! Expense store backed by an append-only CSV file
//!
//! One data row per expense under a `date,amount,category,note` header.
//! Loading is best-effort: a row that fails to parse is skipped so a
//! hand-edited or partially written file never aborts a command.

use std::fs::OpenOptions;
use std::path::PathBuf;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{XpenseError, XpenseResult};
use crate::models::{Expense, Money, DATE_FMT};

/// Store for expense persistence
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a new expense store for the given CSV path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create the CSV file with its header row if it doesn't exist yet
    ///
    /// Idempotent; safe to call on every invocation.
    pub fn init(&self) -> XpenseResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| {
            XpenseError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?;
        writer
            .write_record(["date", "amount", "category", "note"])
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|e| XpenseError::Storage(format!("Failed to write header: {}", e)))?;

        Ok(())
    }

    /// Load every stored expense in file order
    ///
    /// Each row is parsed independently; malformed rows (bad date, non-numeric
    /// amount, missing field) are dropped without aborting the load.
    pub fn load(&self) -> XpenseResult<Vec<Expense>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                XpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut expenses = Vec::new();
        for record in reader.records().flatten() {
            if let Some(expense) = parse_record(&record) {
                expenses.push(expense);
            }
        }

        Ok(expenses)
    }

    /// Append a single expense to the end of the store
    ///
    /// The row is flushed before this returns; nothing is buffered across the
    /// process lifetime.
    pub fn append(&self, expense: &Expense) -> XpenseResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| {
                XpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer
            .write_record([
                expense.when.format(DATE_FMT).to_string(),
                expense.amount.to_decimal_string(),
                expense.category.clone(),
                expense.note.clone(),
            ])
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|e| XpenseError::Storage(format!("Failed to append expense: {}", e)))?;

        Ok(())
    }
}

/// Parse one CSV record into an expense, or None if any field is unusable
fn parse_record(record: &StringRecord) -> Option<Expense> {
    let when = NaiveDate::parse_from_str(record.get(0)?, DATE_FMT).ok()?;
    let amount = Money::parse(record.get(1)?).ok()?;
    let category = record.get(2)?;
    if category.is_empty() {
        return None;
    }
    let note = record.get(3).unwrap_or("");

    Some(Expense::new(when, amount, category, note))
}
