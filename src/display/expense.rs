//! Expense display formatting
//!
//! Formats expense listings and spending summaries for the terminal.

use crate::models::{BudgetWarning, Expense, Money, Month};
use crate::services::ExpenseSummary;

/// Format a single expense as a listing row
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:<3} {}  {:<14} {:<8} {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.description, 12),
        expense.amount.format_with_symbol(symbol),
        expense.category
    )
    .trim_end()
    .to_string()
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("ID  Date        Description      Amount   Category\n");
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    output
}

/// Format a spending summary, including any budget warning
pub fn format_summary(summary: &ExpenseSummary, symbol: &str) -> String {
    let total = summary.total.format_with_symbol(symbol);
    let mut output = match summary.month {
        Some(month) => format!("Total expenses for {}: {}\n", month.name(), total),
        None => format!("Total expenses: {}\n", total),
    };

    if let Some(warning) = &summary.warning {
        output.push_str(&format_warning(warning, symbol));
    }

    output
}

/// Format a budget warning line
pub fn format_warning(warning: &BudgetWarning, symbol: &str) -> String {
    format!("{}\n", warning.message(symbol))
}

/// Format the confirmation for a newly set budget
pub fn format_budget_set(month: Month, ceiling: Money, symbol: &str) -> String {
    format!(
        "Budget of {} set for month {}.\n",
        ceiling.format_with_symbol(symbol),
        month.name()
    )
}

/// Truncate a string to at most `max` characters
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
