use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::{handle_command, user_message, Commands};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Expense Tracker Application",
    long_about = "Record expenses, set monthly budgets, and export your spending \
                  to CSV. Data is kept in expenses.json and budget.json in the \
                  data directory."
)]
struct Cli {
    /// Directory holding expenses.json and budget.json (defaults to the current directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = ExpensePaths::new(cli.data_dir)?;
    let settings = Settings::load(&paths)?;

    if let Commands::Config = cli.command {
        println!("Expense Tracker Configuration");
        println!("=============================");
        println!("Data directory: {}", paths.base_dir().display());
        println!("Expenses file:  {}", paths.expenses_file().display());
        println!("Budget file:    {}", paths.budget_file().display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        return Ok(());
    }

    let storage = Storage::new(paths);
    if let Err(err) = handle_command(&storage, &settings, cli.command) {
        match user_message(&err) {
            Some(message) => println!("{}", message),
            None => return Err(err.into()),
        }
    }

    Ok(())
}
