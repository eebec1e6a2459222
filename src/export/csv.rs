//! CSV Export functionality
//!
//! Writes expenses with the columns `id,date,description,amount,category`,
//! using the stored values as-is.

use std::io::Write;
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Column names of the export, in order
pub const CSV_HEADER: [&str; 5] = ["id", "date", "description", "amount", "category"];

/// Write expenses as CSV to any writer
///
/// The header row is written even when `expenses` is empty.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for expense in expenses {
        csv_writer.serialize(expense)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

/// Export expenses (optionally one category) to a file
///
/// Returns the number of rows written. When nothing matches, no file is
/// created and any existing file is left untouched.
pub fn export_to_file(
    storage: &Storage,
    path: &Path,
    category: Option<&str>,
) -> ExpenseResult<usize> {
    let expenses = ExpenseService::new(storage).list(category)?;
    if expenses.is_empty() {
        return Err(ExpenseError::EmptyResult("No expenses to export.".into()));
    }

    let file = std::fs::File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    export_expenses_csv(&expenses, file)?;

    tracing::info!(rows = expenses.len(), path = %path.display(), "exported expenses");
    Ok(expenses.len())
}
