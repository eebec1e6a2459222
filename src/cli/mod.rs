//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, Month};
use crate::services::UpdateExpenseInput;
use crate::storage::{DataFiles, Storage};

pub use budget::{handle_set_budget, handle_show_budget};
pub use expense::{handle_add, handle_delete, handle_list, handle_summary, handle_update};
pub use export::handle_export_csv;

/// Expense tracker subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an expense
    Add {
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Amount spent
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        /// Category (optional)
        #[arg(long)]
        category: Option<String>,
    },

    /// Update an expense
    Update {
        /// ID of expense to update
        #[arg(long)]
        id: ExpenseId,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// New category
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// ID of the expense to delete
        #[arg(long)]
        id: ExpenseId,
    },

    /// View all expenses
    List {
        /// Filter expenses by category
        #[arg(long)]
        category: Option<String>,
    },

    /// View summary of expenses
    Summary {
        /// Summary for specific month (1-12) of the current year
        #[arg(long)]
        month: Option<Month>,
    },

    /// Set monthly budget
    SetBudget {
        /// Month (1-12)
        #[arg(long)]
        month: Month,
        /// Budget amount
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },

    /// Show monthly budgets
    ShowBudget {
        /// Month (1-12); all months when omitted
        #[arg(long)]
        month: Option<Month>,
    },

    /// Export expenses to CSV
    ExportCsv {
        /// Output CSV filename
        filename: PathBuf,
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

impl Commands {
    /// The data files this command reads
    pub fn data_files(&self) -> DataFiles {
        match self {
            Commands::Add { .. } | Commands::Summary { .. } => DataFiles::Both,
            Commands::Update { .. }
            | Commands::Delete { .. }
            | Commands::List { .. }
            | Commands::ExportCsv { .. } => DataFiles::Expenses,
            Commands::SetBudget { .. } | Commands::ShowBudget { .. } => DataFiles::Budget,
            Commands::Config => DataFiles::Neither,
        }
    }
}

/// Handle a data command
///
/// Only the files the command needs are loaded. `Config` is handled by the
/// binary since it needs no storage.
pub fn handle_command(storage: &Storage, settings: &Settings, cmd: Commands) -> ExpenseResult<()> {
    storage.load(cmd.data_files())?;

    match cmd {
        Commands::Add {
            description,
            amount,
            category,
        } => handle_add(storage, settings, description, amount, category),
        Commands::Update {
            id,
            description,
            amount,
            category,
        } => handle_update(
            storage,
            id,
            UpdateExpenseInput {
                description,
                amount,
                category,
            },
        ),
        Commands::Delete { id } => handle_delete(storage, id),
        Commands::List { category } => handle_list(storage, settings, category),
        Commands::Summary { month } => handle_summary(storage, settings, month),
        Commands::SetBudget { month, amount } => handle_set_budget(storage, settings, month, amount),
        Commands::ShowBudget { month } => handle_show_budget(storage, settings, month),
        Commands::ExportCsv { filename, category } => {
            handle_export_csv(storage, &filename, category)
        }
        Commands::Config => Ok(()),
    }
}

/// The message to print for an error caused by user input
///
/// Returns `None` for environment failures, which should abort the process.
pub fn user_message(err: &ExpenseError) -> Option<String> {
    match err {
        ExpenseError::EmptyResult(notice) => Some(notice.clone()),
        e if e.is_user_error() => Some(format!("Error: {}", e)),
        _ => None,
    }
}
