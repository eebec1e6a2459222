//! Budget repository for JSON storage
//!
//! Manages the month-to-ceiling mapping in budget.json, stored as an object
//! keyed by month number text (`{"6": 100.0}`).

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Money, Month};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget ceilings
pub struct BudgetRepository {
    path: PathBuf,
    ceilings: RwLock<BTreeMap<Month, Money>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ceilings: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load ceilings from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: BTreeMap<Month, Money> = read_json(&self.path)?;
        tracing::debug!(count = file_data.len(), path = %self.path.display(), "loaded budget");

        let mut ceilings = self.ceilings.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *ceilings = file_data;
        Ok(())
    }

    /// Save ceilings to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let ceilings = self.ceilings.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*ceilings)
    }

    /// Get the ceiling for a month, if one is set
    pub fn get(&self, month: Month) -> Result<Option<Money>, ExpenseError> {
        let ceilings = self.ceilings.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(ceilings.get(&month).copied())
    }

    /// Get all ceilings in month order
    pub fn get_all(&self) -> Result<Vec<(Month, Money)>, ExpenseError> {
        let ceilings = self.ceilings.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(ceilings.iter().map(|(m, a)| (*m, *a)).collect())
    }

    /// Set or overwrite the ceiling for a month
    pub fn set(&self, month: Month, amount: Money) -> Result<(), ExpenseError> {
        let mut ceilings = self.ceilings.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        ceilings.insert(month, amount);
        Ok(())
    }
}
