//! Budget model
//!
//! A spending limit for one category in one month. There is at most one
//! budget per (category, month); setting it again overwrites the amount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::period::Period;
use super::validation::{require_positive, require_text, ValidationError};

/// A monthly budget for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category name
    pub category: String,

    /// The month this budget applies to
    pub month: Period,

    /// Amount budgeted
    pub amount: Money,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the amount was last changed
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a budget from already-validated input
    pub fn new(input: BudgetInput) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: input.category,
            month: input.month,
            amount: input.amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the budgeted amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Whether the amount can take part in sums
    pub fn is_countable(&self) -> bool {
        self.amount.is_summable()
    }

    /// Whether this budget is for the given category and month
    pub fn is_for(&self, category: &str, month: Period) -> bool {
        self.category == category && self.month == month
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.amount)
    }
}

/// User-submitted budget fields
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetInput {
    pub category: String,
    pub month: Period,
    pub amount: Money,
}

impl BudgetInput {
    /// Check the input; category names are not checked against the store
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            category: require_text(&self.category, "Category")?,
            month: self.month,
            amount: require_positive(self.amount)?,
        })
    }
}
