//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. The file is a plain
//! JSON array kept in insertion order.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Expense>>, ExpenseError> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Expense>>, ExpenseError> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), ExpenseError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        tracing::debug!(count = expenses.len(), path = %self.path.display(), "loaded expenses");

        *self.write()? = expenses;
        Ok(())
    }

    /// Save all expenses to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self.read()?;
        write_json_atomic(&self.path, &*data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        Ok(self.read()?.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.read()?.clone())
    }

    /// Get expenses whose category equals `category` exactly
    pub fn get_by_category(&self, category: &str) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self
            .read()?
            .iter()
            .filter(|e| e.has_category(category))
            .cloned()
            .collect())
    }

    /// The identifier the next inserted expense should receive
    ///
    /// One more than the highest existing identifier, or 1 when empty.
    pub fn next_id(&self) -> Result<ExpenseId, ExpenseError> {
        match self.read()?.iter().map(|e| e.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                ExpenseError::Storage(format!("No expense ID is available after {}", max))
            }),
        }
    }

    /// Append an expense
    pub fn insert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self.write()?;
        if data.iter().any(|e| e.id == expense.id) {
            return Err(ExpenseError::Storage(format!(
                "Duplicate expense ID: {}",
                expense.id
            )));
        }
        data.push(expense);
        Ok(())
    }

    /// Replace the stored expense with the same ID, keeping its position
    ///
    /// Returns false if no expense has that ID.
    pub fn replace(&self, expense: Expense) -> Result<bool, ExpenseError> {
        let mut data = self.write()?;
        match data.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                *slot = expense;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete an expense
    ///
    /// Returns false if nothing was removed.
    pub fn delete(&self, id: ExpenseId) -> Result<bool, ExpenseError> {
        let mut data = self.write()?;
        let before = data.len();
        data.retain(|e| e.id != id);
        Ok(data.len() != before)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(id: ExpenseId, category: &str) -> Expense {
        Expense::new(
            id,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            format!("item {}", id),
            Money::from_cents(100 * id as i64),
            category,
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.next_id().unwrap(), 1);
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(expense(1, "food")).unwrap();

        let retrieved = repo.get(1).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 100);
        assert!(repo.get(2).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(expense(1, "")).unwrap();
        assert!(repo.insert(expense(1, "")).is_err());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_next_id_follows_max() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(expense(2, "")).unwrap();
        repo.insert(expense(7, "")).unwrap();
        repo.insert(expense(4, "")).unwrap();
        assert_eq!(repo.next_id().unwrap(), 8);
    }

    #[test]
    fn test_next_id_exhausted() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("expenses.json"),
            format!(
                r#"[{{"id": {}, "date": "2025-01-15", "description": "x", "amount": 1.0, "category": ""}}]"#,
                u32::MAX
            ),
        )
        .unwrap();
        repo.load().unwrap();

        let err = repo.next_id().unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }

    #[test]
    fn test_get_by_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(expense(1, "food")).unwrap();
        repo.insert(expense(2, "")).unwrap();
        repo.insert(expense(3, "food")).unwrap();
        repo.insert(expense(4, "Food")).unwrap();

        let food: Vec<_> = repo
            .get_by_category("food")
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(food, vec![1, 3]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(expense(1, "")).unwrap();
        repo.insert(expense(2, "")).unwrap();

        let mut changed = expense(1, "books");
        changed.description = "changed".into();
        assert!(repo.replace(changed).unwrap());
        assert!(!repo.replace(expense(9, "")).unwrap());

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].description, "changed");
        assert_eq!(all[1].id, 2);
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.insert(expense(3, "")).unwrap();
        repo.insert(expense(1, "")).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        let ids: Vec<_> = repo2.get_all().unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(expense(1, "")).unwrap();

        assert!(repo.delete(1).unwrap());
        assert!(!repo.delete(1).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
