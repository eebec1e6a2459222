//! Export CLI command

use std::path::Path;

use crate::error::ExpenseResult;
use crate::export::export_to_file;
use crate::storage::Storage;

/// Export expenses to a CSV file, overwriting it
pub fn handle_export_csv(
    storage: &Storage,
    filename: &Path,
    category: Option<String>,
) -> ExpenseResult<()> {
    export_to_file(storage, filename, category.as_deref())?;
    println!("Exported expenses to {}", filename.display());
    Ok(())
}
