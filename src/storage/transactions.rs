//! Transaction repository
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Period, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Newest first: by date, then by creation time
fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: TransactionData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(lock_error)?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Find a transaction by full ID or the short form shown in listings
    pub fn find(&self, identifier: &str) -> Result<Option<Transaction>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;

        if let Ok(id) = identifier.parse::<TransactionId>() {
            if let Some(txn) = data.get(&id) {
                return Ok(Some(txn.clone()));
            }
        }

        let mut matches = data.values().filter(|t| t.id.matches_short(identifier));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(Some(txn.clone())),
            _ => Ok(None),
        }
    }

    /// All transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Transactions dated within a period, newest first
    pub fn get_by_period(&self, period: Period) -> Result<Vec<Transaction>, FinanceError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| period.contains(t.date))
            .collect())
    }

    /// Number of transactions referencing a category name
    pub fn count_for_category(&self, category: &str) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().filter(|t| t.category == category).count())
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionInput};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn txn(amount: i64, date: (i32, u32, u32), category: &str) -> Transaction {
        Transaction::new(TransactionInput {
            amount: Money::from_major(amount),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: "test".into(),
            category: category.into(),
        })
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_get_all_is_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(txn(10, (2024, 5, 1), "Food")).unwrap();
        repo.upsert(txn(20, (2024, 6, 10), "Food")).unwrap();
        repo.upsert(txn(30, (2024, 6, 2), "Bills")).unwrap();

        let dates: Vec<_> = repo.get_all().unwrap().iter().map(|t| t.date).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_get_by_period() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(txn(10, (2024, 5, 31), "Food")).unwrap();
        repo.upsert(txn(20, (2024, 6, 1), "Food")).unwrap();
        repo.upsert(txn(30, (2023, 6, 15), "Food")).unwrap();

        let june = Period::new(2024, 6).unwrap();
        let in_june = repo.get_by_period(june).unwrap();
        assert_eq!(in_june.len(), 1);
        assert_eq!(in_june[0].amount, Money::from_major(20));
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        let t = txn(10, (2024, 6, 1), "Food");
        let id = t.id;
        repo.upsert(t).unwrap();

        assert_eq!(repo.find(&id.to_string()).unwrap().unwrap().id, id);
        assert_eq!(repo.find(&id.as_uuid().to_string()).unwrap().unwrap().id, id);
        assert!(repo.find("txn-zzzzzzzz").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let t = txn(10, (2024, 6, 1), "Food");
        let id = t.id;
        repo.upsert(t).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(id).unwrap().unwrap().category, "Food");
    }

    #[test]
    fn test_delete_and_count_for_category() {
        let (_temp_dir, repo) = create_test_repo();
        let t = txn(10, (2024, 6, 1), "Food");
        let id = t.id;
        repo.upsert(t).unwrap();
        repo.upsert(txn(5, (2024, 6, 2), "Food")).unwrap();

        assert_eq!(repo.count_for_category("Food").unwrap(), 2);
        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count_for_category("Food").unwrap(), 1);
    }
}
