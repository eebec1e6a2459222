//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes. Each repository loads its
//! whole file and rewrites it in full on save.

pub mod budget;
pub mod expenses;
pub mod file_io;

pub use budget::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Which data files an operation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFiles {
    Expenses,
    Budget,
    Both,
    Neither,
}

impl DataFiles {
    fn expenses(self) -> bool {
        matches!(self, DataFiles::Expenses | DataFiles::Both)
    }

    fn budget(self) -> bool {
        matches!(self, DataFiles::Budget | DataFiles::Both)
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load the requested files from disk
    ///
    /// Files that are not requested are never opened, so a damaged budget
    /// file does not get in the way of expense-only commands.
    pub fn load(&self, files: DataFiles) -> Result<(), ExpenseError> {
        if files.expenses() {
            self.expenses.load()?;
        }
        if files.budget() {
            self.budget.load()?;
        }
        Ok(())
    }
}
