//! Display formatting for terminal output

pub mod expense;

pub use expense::{
    format_budget_set, format_expense_list, format_expense_row, format_summary, format_warning,
};
