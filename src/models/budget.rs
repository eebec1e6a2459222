//! Budget ceilings and threshold warnings

use std::fmt;

use super::money::Money;
use super::month::Month;

/// Raised when a month's spending goes past its configured ceiling
///
/// The same warning is produced whether the total was recomputed after adding
/// an expense or while summarizing a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWarning {
    pub month: Month,
    pub ceiling: Money,
    pub total: Money,
}

impl BudgetWarning {
    /// Compare a month total against an optional ceiling
    ///
    /// Only a total strictly greater than the ceiling produces a warning.
    pub fn check(month: Month, ceiling: Option<Money>, total: Money) -> Option<Self> {
        let ceiling = ceiling?;
        (total > ceiling).then_some(Self {
            month,
            ceiling,
            total,
        })
    }

    /// Render the warning with a specific currency symbol
    pub fn message(&self, symbol: &str) -> String {
        format!(
            "Warning: You have exceeded your budget ({}) for {}.",
            self.ceiling.format_with_symbol(symbol),
            self.month.name()
        )
    }
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message("$"))
    }
}
