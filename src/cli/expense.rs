//! Expense CLI commands
//!
//! Handlers for add, update, delete, list, and summary.

use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_summary, format_warning};
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, Month};
use crate::services::{CreateExpenseInput, ExpenseService, UpdateExpenseInput};
use crate::storage::Storage;

/// Add an expense dated today
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    description: String,
    amount: f64,
    category: Option<String>,
) -> ExpenseResult<()> {
    let added = ExpenseService::new(storage).add(CreateExpenseInput {
        description,
        amount,
        category,
    })?;

    println!("Expense added successfully (ID: {})", added.expense.id);
    if let Some(warning) = &added.warning {
        print!("{}", format_warning(warning, &settings.currency_symbol));
    }
    Ok(())
}

/// Update fields of an existing expense
pub fn handle_update(storage: &Storage, id: ExpenseId, input: UpdateExpenseInput) -> ExpenseResult<()> {
    ExpenseService::new(storage).update(id, input)?;
    println!("Expense updated successfully");
    Ok(())
}

/// Delete an expense
pub fn handle_delete(storage: &Storage, id: ExpenseId) -> ExpenseResult<()> {
    ExpenseService::new(storage).delete(id)?;
    println!("Expense deleted successfully");
    Ok(())
}

/// List expenses, optionally filtered by category
pub fn handle_list(
    storage: &Storage,
    settings: &Settings,
    category: Option<String>,
) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(storage).list(category.as_deref())?;
    print!("{}", format_expense_list(&expenses, &settings.currency_symbol));
    Ok(())
}

/// Print total spending, overall or for a month of the current year
pub fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    month: Option<Month>,
) -> ExpenseResult<()> {
    let summary = ExpenseService::new(storage).summary(month)?;
    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}
