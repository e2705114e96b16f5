//! Transaction service
//!
//! Validates transactions against the category list before they reach
//! the store, and persists every change.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Period, Transaction, TransactionId, TransactionInput};
use crate::storage::Storage;

/// Fields to change on an existing transaction; `None` keeps the value
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl TransactionUpdate {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.category.is_none()
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn validate(&self, input: TransactionInput) -> FinanceResult<TransactionInput> {
        let names = self.storage.categories.names()?;
        Ok(input.validate(names.iter().map(String::as_str))?)
    }

    /// Record a new transaction
    pub fn create(&self, input: TransactionInput) -> FinanceResult<Transaction> {
        let txn = Transaction::new(self.validate(input)?);

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;
        tracing::info!(id = %txn.id, amount = %txn.amount, category = %txn.category, "transaction created");

        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> FinanceResult<Transaction> {
        self.storage
            .transactions
            .find(identifier)?
            .ok_or_else(|| FinanceError::transaction_not_found(identifier))
    }

    /// All transactions, newest first, optionally within one month
    pub fn list(&self, period: Option<Period>) -> FinanceResult<Vec<Transaction>> {
        match period {
            Some(period) => self.storage.transactions.get_by_period(period),
            None => self.storage.transactions.get_all(),
        }
    }

    /// Change some fields of a transaction; the result is validated as a whole
    pub fn update(&self, id: TransactionId, update: TransactionUpdate) -> FinanceResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        let input = TransactionInput {
            amount: update.amount.unwrap_or(txn.amount),
            date: update.date.unwrap_or(txn.date),
            description: update.description.unwrap_or_else(|| txn.description.clone()),
            category: update.category.unwrap_or_else(|| txn.category.clone()),
        };
        txn.apply(self.validate(input)?);

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;
        tracing::info!(id = %txn.id, "transaction updated");

        Ok(txn)
    }

    pub fn delete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;
        tracing::info!(id = %txn.id, "transaction deleted");

        Ok(txn)
    }
}
