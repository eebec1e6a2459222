//! Expense model
//!
//! A single dated spending record.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::Month;

/// Identifier of an expense record
///
/// Assigned sequentially by the store; a new record always receives one more
/// than the highest surviving identifier.
pub type ExpenseId = u32;

/// A recorded expense
///
/// Field order matches the on-disk and CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Day the expense was recorded
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category, empty when unset
    #[serde(default)]
    pub category: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// Whether the expense falls in the given month of the given year
    pub fn is_in_month(&self, month: Month, year: i32) -> bool {
        Month::of(&self.date) == month && self.date.year() == year
    }

    /// Exact, case-sensitive category match
    pub fn has_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.id == 0 {
            return Err(ExpenseValidationError::ZeroId);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id, self.date, self.description, self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    ZeroId,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroId => write!(f, "Expense ID must be a positive number"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
