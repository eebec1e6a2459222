//! Calendar month number
//!
//! Budgets are keyed by month number alone (1-12), independent of year.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month number in the range 1-12
///
/// Serializes as a plain integer; as a JSON object key that becomes the
/// text form (`"6"`) used by the budget file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    /// Create a month from its number, returning `None` outside 1-12
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// The month a date falls in
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self(date.month())
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Self)
    }

    /// The month number (1-12)
    pub fn number(&self) -> u32 {
        self.0
    }

    /// English display name, e.g. "June"
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }
}

impl TryFrom<u32> for Month {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Month::new(value).ok_or_else(|| format!("month must be between 1 and 12, got {}", value))
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid month: {}", s))?;
        Month::try_from(number)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
