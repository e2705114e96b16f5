//! JSON export
//!
//! A full dump of the store with schema versioning, and a generic writer
//! used for report exports.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Category, Transaction, OTHER_CATEGORY};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    pub category_count: usize,

    /// Earliest transaction date
    pub earliest_transaction: Option<String>,

    /// Latest transaction date
    pub latest_transaction: Option<String>,

    /// Category names used by transactions or budgets but missing from
    /// the category list (left behind by renames and deletions)
    pub orphaned_categories: Vec<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        let categories = storage.categories.get_all()?;
        let transactions = storage.transactions.get_all()?;
        let budgets = storage.budgets.list(None)?;

        let known: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        let mut orphaned: Vec<String> = transactions
            .iter()
            .map(|t| t.category.as_str())
            .chain(budgets.iter().map(|b| b.category.as_str()))
            .filter(|name| *name != OTHER_CATEGORY && !known.contains(name))
            .map(str::to_string)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        orphaned.sort();

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            category_count: categories.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
            orphaned_categories: orphaned,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories,
            transactions,
            budgets,
            metadata,
        })
    }
}

/// Write any serializable value as JSON
pub fn write_json<T: Serialize, W: Write>(value: &T, writer: W, pretty: bool) -> FinanceResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))
}

/// Export the full database to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: W, pretty: bool) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;
    write_json(&export, writer, pretty)
}
