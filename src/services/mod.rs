//! Service layer for finance-visualizer
//!
//! Validates records before the store admits them and saves after every
//! change. Reports read the store directly.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use transaction::{TransactionService, TransactionUpdate};
