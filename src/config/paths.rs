//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag or the
//!    `EXPENSE_TRACKER_DATA_DIR` environment variable, both handled by clap)
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory holding the expense, budget, and settings files
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from an optional explicit directory
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is given and the current working
    /// directory cannot be determined.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to budget.json (month ceilings)
    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }
}
