//! Budget service
//!
//! Month ceilings and the shared over-budget check used by both adding an
//! expense and summarizing a month.

use crate::error::ExpenseResult;
use crate::models::{BudgetWarning, Money, Month};
use crate::storage::Storage;

use super::positive_amount;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set (or overwrite) the ceiling for a month and persist it
    ///
    /// Returns the rounded ceiling that was stored.
    pub fn set_budget(&self, month: Month, amount: f64) -> ExpenseResult<Money> {
        let ceiling = positive_amount(amount, "Budget amount must be positive.")?;

        self.storage.budget.set(month, ceiling)?;
        self.storage.budget.save()?;
        tracing::info!(month = month.number(), ceiling = %ceiling, "budget set");

        Ok(ceiling)
    }

    /// The ceiling for a month, if one has been set
    pub fn get_budget(&self, month: Month) -> ExpenseResult<Option<Money>> {
        self.storage.budget.get(month)
    }

    /// All configured ceilings in month order
    pub fn list_budgets(&self) -> ExpenseResult<Vec<(Month, Money)>> {
        self.storage.budget.get_all()
    }

    /// Compare a month total against that month's ceiling
    ///
    /// Ceilings are year-independent, so the caller decides which year's
    /// expenses went into `total`.
    pub fn check_threshold(&self, month: Month, total: Money) -> ExpenseResult<Option<BudgetWarning>> {
        let warning = BudgetWarning::check(month, self.get_budget(month)?, total);
        if let Some(w) = &warning {
            tracing::info!(
                month = month.number(),
                ceiling = %w.ceiling,
                total = %w.total,
                "budget exceeded"
            );
        }
        Ok(warning)
    }
}
