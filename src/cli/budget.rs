//! Budget CLI commands
//!
//! Setting and inspecting monthly ceilings.

use crate::config::settings::Settings;
use crate::display::format_budget_set;
use crate::error::ExpenseResult;
use crate::models::Month;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Set the ceiling for a month
pub fn handle_set_budget(
    storage: &Storage,
    settings: &Settings,
    month: Month,
    amount: f64,
) -> ExpenseResult<()> {
    let ceiling = BudgetService::new(storage).set_budget(month, amount)?;
    print!(
        "{}",
        format_budget_set(month, ceiling, &settings.currency_symbol)
    );
    Ok(())
}

/// Show the ceiling for one month, or every configured ceiling
pub fn handle_show_budget(
    storage: &Storage,
    settings: &Settings,
    month: Option<Month>,
) -> ExpenseResult<()> {
    let service = BudgetService::new(storage);
    let symbol = &settings.currency_symbol;

    match month {
        Some(month) => match service.get_budget(month)? {
            Some(ceiling) => println!(
                "Budget for {}: {}",
                month.name(),
                ceiling.format_with_symbol(symbol)
            ),
            None => println!("No budget set for {}.", month.name()),
        },
        None => {
            let budgets = service.list_budgets()?;
            if budgets.is_empty() {
                println!("No budgets set.");
            }
            for (month, ceiling) in budgets {
                println!("{:<10} {}", month.name(), ceiling.format_with_symbol(symbol));
            }
        }
    }

    Ok(())
}
