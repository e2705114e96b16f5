//! Core data models
//!
//! Transactions, budgets, and categories, plus the money and period types
//! they are built from. Records only enter the store through the
//! `validate` functions defined here.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;
pub mod validation;

pub use budget::{Budget, BudgetInput};
pub use category::{Category, CategoryInput, DEFAULT_CATEGORIES, OTHER_CATEGORY, OTHER_COLOR};
pub use ids::{BudgetId, CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use transaction::{Transaction, TransactionInput};
pub use validation::ValidationError;
