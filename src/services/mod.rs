//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence, and budget checks.

pub mod budget;
pub mod expense;

pub use budget::BudgetService;
pub use expense::{
    AddedExpense, CreateExpenseInput, ExpenseService, ExpenseSummary, UpdateExpenseInput,
};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Convert user input into a strictly positive amount rounded to cents
///
/// Values that round to zero are rejected along with negatives and NaN.
pub(crate) fn positive_amount(value: f64, message: &str) -> ExpenseResult<Money> {
    Money::from_f64(value)
        .filter(Money::is_positive)
        .ok_or_else(|| ExpenseError::InvalidAmount(message.to_string()))
}
