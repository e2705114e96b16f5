//! Storage layer for finance-visualizer
//!
//! Three JSON collections (transactions, budgets, categories) held in
//! memory behind locks and written back atomically.

pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use budgets::{BudgetKey, BudgetRepository};
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::bootstrap;
pub use transactions::TransactionRepository;

use std::fmt::Display;

use crate::config::paths::FinvizPaths;
use crate::error::FinanceError;

pub(crate) fn lock_error<E: Display>(e: E) -> FinanceError {
    FinanceError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinvizPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a storage handle without reading anything from disk
    pub fn new(paths: FinvizPaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Create a storage handle and load every collection
    pub fn open(paths: FinvizPaths) -> Result<Self, FinanceError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        tracing::debug!(
            dir = %storage.paths.data_dir().display(),
            transactions = storage.transactions.count()?,
            budgets = storage.budgets.count()?,
            categories = storage.categories.count()?,
            "storage opened"
        );
        Ok(storage)
    }

    pub fn paths(&self) -> &FinvizPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), FinanceError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.categories.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinanceError> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.categories.save()?;
        Ok(())
    }

    /// Flush everything to disk and release the handle
    pub fn close(self) -> Result<(), FinanceError> {
        self.save_all()?;
        tracing::debug!("storage closed");
        Ok(())
    }
}
