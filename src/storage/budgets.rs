//! Budget repository
//!
//! Budgets are keyed by (category, month), so the store itself holds at
//! most one budget per pair.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Budget, BudgetId, Period};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Composite key for budgets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BudgetKey {
    pub category: String,
    pub month: Period,
}

impl BudgetKey {
    pub fn new(category: impl Into<String>, month: Period) -> Self {
        Self {
            category: category.into(),
            month,
        }
    }

    fn of(budget: &Budget) -> Self {
        Self::new(budget.category.clone(), budget.month)
    }
}

/// Latest first, matching the order budgets were entered
fn sort_latest_first(budgets: &mut [Budget]) {
    budgets.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.category.cmp(&b.category))
    });
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<BudgetKey, Budget>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    ///
    /// If the file holds two budgets for the same pair, the one updated
    /// last wins.
    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: BudgetData = read_json(&self.path)?;
        let mut budgets = self.budgets.write().map_err(lock_error)?;

        budgets.clear();
        for budget in file_data.budgets {
            let key = BudgetKey::of(&budget);
            match budgets.get(&key) {
                Some(existing) if existing.updated_at > budget.updated_at => {
                    tracing::warn!(%key.category, month = %key.month, "dropping duplicate budget");
                }
                _ => {
                    budgets.insert(key, budget);
                }
            }
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| a.month.cmp(&b.month).then_with(|| a.category.cmp(&b.category)));

        write_json_atomic(&self.path, &BudgetData { budgets: list })
    }

    /// Budgets, optionally restricted to one month, latest first
    pub fn list(&self, month: Option<Period>) -> Result<Vec<Budget>, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;

        let mut list: Vec<_> = budgets
            .values()
            .filter(|b| month.map_or(true, |m| b.month == m))
            .cloned()
            .collect();
        sort_latest_first(&mut list);
        Ok(list)
    }

    /// The budget for a category in a month, if any
    pub fn get_for(&self, category: &str, month: Period) -> Result<Option<Budget>, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.get(&BudgetKey::new(category, month)).cloned())
    }

    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.values().find(|b| b.id == id).cloned())
    }

    /// Find a budget by full ID or the short form shown in listings
    pub fn find(&self, identifier: &str) -> Result<Option<Budget>, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;

        if let Ok(id) = identifier.parse::<BudgetId>() {
            if let Some(budget) = budgets.values().find(|b| b.id == id) {
                return Ok(Some(budget.clone()));
            }
        }

        let mut matches = budgets.values().filter(|b| b.id.matches_short(identifier));
        match (matches.next(), matches.next()) {
            (Some(budget), None) => Ok(Some(budget.clone())),
            _ => Ok(None),
        }
    }

    /// Insert a budget, replacing any budget for the same (category, month)
    pub fn upsert(&self, budget: Budget) -> Result<(), FinanceError> {
        let mut budgets = self.budgets.write().map_err(lock_error)?;
        budgets.insert(BudgetKey::of(&budget), budget);
        Ok(())
    }

    /// Delete a budget, returning whether it existed
    pub fn delete(&self, id: BudgetId) -> Result<bool, FinanceError> {
        let mut budgets = self.budgets.write().map_err(lock_error)?;
        let before = budgets.len();
        budgets.retain(|_, b| b.id != id);
        Ok(budgets.len() != before)
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetInput, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn budget(category: &str, month: Period, amount: i64) -> Budget {
        Budget::new(BudgetInput {
            category: category.into(),
            month,
            amount: Money::from_major(amount),
        })
    }

    fn june() -> Period {
        Period::new(2024, 6).unwrap()
    }

    #[test]
    fn test_upsert_replaces_same_pair() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(budget("Food", june(), 1000)).unwrap();
        repo.upsert(budget("Food", june(), 1500)).unwrap();
        repo.upsert(budget("Food", june().next(), 800)).unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        assert_eq!(
            repo.get_for("Food", june()).unwrap().unwrap().amount,
            Money::from_major(1500)
        );
    }

    #[test]
    fn test_list_filters_by_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(budget("Food", june(), 1000)).unwrap();
        repo.upsert(budget("Bills", june(), 500)).unwrap();
        repo.upsert(budget("Food", june().prev(), 900)).unwrap();

        assert_eq!(repo.list(Some(june())).unwrap().len(), 2);
        assert_eq!(repo.list(None).unwrap().len(), 3);
        assert!(repo.list(Some(june().next())).unwrap().is_empty());
    }

    #[test]
    fn test_delete_and_find() {
        let (_temp_dir, repo) = create_test_repo();
        let b = budget("Food", june(), 1000);
        let id = b.id;
        repo.upsert(b).unwrap();

        assert_eq!(repo.find(&id.to_string()).unwrap().unwrap().id, id);
        assert!(repo.delete(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.upsert(budget("Food", june(), 1000)).unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo2.load().unwrap();
        assert_eq!(
            repo2.get_for("Food", june()).unwrap().unwrap().amount,
            Money::from_major(1000)
        );
    }
}
