//! Core data models for the expense tracker
//!
//! Expenses, month numbers, money, and budget warnings.

pub mod budget;
pub mod expense;
pub mod money;
pub mod month;

pub use budget::BudgetWarning;
pub use expense::{Expense, ExpenseId, ExpenseValidationError};
pub use money::Money;
pub use month::Month;
