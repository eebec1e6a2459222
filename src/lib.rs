//! Expense Tracker - command-line expense records with monthly budgets
//!
//! Expenses and month budgets are kept in two JSON files. Every command
//! loads what it needs, applies one change or query, and writes changed
//! files back in full.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, money, months, budget warnings
//! - `storage`: JSON file repositories
//! - `services`: Business logic (validation, ids, summaries, budget checks)
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::{CreateExpenseInput, ExpenseService};
//! use expense_tracker::storage::{DataFiles, Storage};
//!
//! # fn main() -> Result<(), expense_tracker::ExpenseError> {
//! let storage = Storage::new(ExpensePaths::new(None)?);
//! storage.load(DataFiles::Both)?;
//!
//! let added = ExpenseService::new(&storage).add(CreateExpenseInput {
//!     description: "Coffee".into(),
//!     amount: 4.5,
//!     category: Some("food".into()),
//! })?;
//! println!("added #{}", added.expense.id);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
