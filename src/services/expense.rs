//! Expense service
//!
//! Provides business logic for expense management: CRUD operations, filtered
//! listing, and month summaries with budget checks.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetWarning, Expense, ExpenseId, Money, Month};
use crate::storage::Storage;

use super::budget::BudgetService;
use super::positive_amount;

const AMOUNT_MESSAGE: &str = "Amount must be a positive number.";

/// Sum expense amounts, failing instead of wrapping on overflow
fn total_of<'e>(expenses: impl IntoIterator<Item = &'e Expense>) -> ExpenseResult<Money> {
    Money::checked_sum(expenses.into_iter().map(|e| e.amount))
        .ok_or_else(|| ExpenseError::Validation("Expense total is too large to represent.".into()))
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: f64,
    pub category: Option<String>,
}

/// Input for updating an expense
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
}

/// Result of adding an expense
#[derive(Debug, Clone)]
pub struct AddedExpense {
    pub expense: Expense,
    /// Set when the expense pushed its month over budget
    pub warning: Option<BudgetWarning>,
}

/// Total spending, either overall or for one month of one year
#[derive(Debug, Clone)]
pub struct ExpenseSummary {
    pub month: Option<Month>,
    pub year: i32,
    pub total: Money,
    pub count: usize,
    pub warning: Option<BudgetWarning>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an expense dated today
    pub fn add(&self, input: CreateExpenseInput) -> ExpenseResult<AddedExpense> {
        self.add_on(Local::now().date_naive(), input)
    }

    /// Add an expense with an explicit date
    ///
    /// After saving, the new expense's month (in its own year) is checked
    /// against the budget ceiling.
    pub fn add_on(&self, date: NaiveDate, input: CreateExpenseInput) -> ExpenseResult<AddedExpense> {
        let amount = positive_amount(input.amount, AMOUNT_MESSAGE)?;

        let expense = Expense::new(
            self.storage.expenses.next_id()?,
            date,
            input.description,
            amount,
            input.category.unwrap_or_default(),
        );
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;
        tracing::info!(id = expense.id, amount = %expense.amount, "expense added");

        let month = Month::of(&expense.date);
        let total = self.month_total(month, expense.date.year())?;
        let warning = BudgetService::new(self.storage).check_threshold(month, total)?;

        Ok(AddedExpense { expense, warning })
    }

    /// Update description, amount, and/or category of an expense
    ///
    /// All inputs are validated before anything changes; a rejected amount
    /// leaves the stored expense untouched.
    pub fn update(&self, id: ExpenseId, input: UpdateExpenseInput) -> ExpenseResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        let amount = input
            .amount
            .map(|value| positive_amount(value, AMOUNT_MESSAGE))
            .transpose()?;

        if let Some(description) = input.description.filter(|d| !d.is_empty()) {
            expense.description = description;
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(category) = input.category.filter(|c| !c.is_empty()) {
            expense.category = category;
        }

        self.storage.expenses.replace(expense.clone())?;
        self.storage.expenses.save()?;
        tracing::info!(id, "expense updated");

        Ok(expense)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<()> {
        if !self.storage.expenses.delete(id)? {
            return Err(ExpenseError::expense_not_found(id));
        }

        self.storage.expenses.save()?;
        tracing::info!(id, "expense deleted");
        Ok(())
    }

    /// List expenses in store order, optionally restricted to one category
    ///
    /// An empty category string means no filter.
    pub fn list(&self, category: Option<&str>) -> ExpenseResult<Vec<Expense>> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => self.storage.expenses.get_by_category(category),
            None => self.storage.expenses.get_all(),
        }
    }

    /// Sum of all expenses in a month of a given year
    pub fn month_total(&self, month: Month, year: i32) -> ExpenseResult<Money> {
        let expenses = self.storage.expenses.get_all()?;
        total_of(expenses.iter().filter(|e| e.is_in_month(month, year)))
    }

    /// Summarize spending; a month is taken from the current year
    pub fn summary(&self, month: Option<Month>) -> ExpenseResult<ExpenseSummary> {
        self.summary_for_year(month, Local::now().year())
    }

    /// Summarize spending for a month of a specific year, or everything
    ///
    /// The year is ignored when no month is given. A month summary also runs
    /// the budget check against its total.
    pub fn summary_for_year(&self, month: Option<Month>, year: i32) -> ExpenseResult<ExpenseSummary> {
        let expenses = self.storage.expenses.get_all()?;

        let Some(month) = month else {
            return Ok(ExpenseSummary {
                month: None,
                year,
                total: total_of(&expenses)?,
                count: expenses.len(),
                warning: None,
            });
        };

        let in_month: Vec<&Expense> = expenses
            .iter()
            .filter(|e| e.is_in_month(month, year))
            .collect();
        let total = total_of(in_month.iter().copied())?;
        let warning = BudgetService::new(self.storage).check_threshold(month, total)?;

        Ok(ExpenseSummary {
            month: Some(month),
            year,
            total,
            count: in_month.len(),
            warning,
        })
    }
}
