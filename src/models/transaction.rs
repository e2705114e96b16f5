//! Transaction model
//!
//! An expense recorded against a category. Categories are referenced by
//! name, not by ID.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::OTHER_CATEGORY;
use super::ids::TransactionId;
use super::money::Money;
use super::period::Period;
use super::validation::{require_positive, require_text, ValidationError};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount spent (always positive once admitted)
    pub amount: Money,

    /// Calendar day of the expense
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Category name
    pub category: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction from already-validated input
    pub fn new(input: TransactionInput) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount: input.amount,
            date: input.date,
            description: input.description,
            category: input.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields with already-validated input
    pub fn apply(&mut self, input: TransactionInput) {
        self.amount = input.amount;
        self.date = input.date;
        self.description = input.description;
        self.category = input.category;
        self.updated_at = Utc::now();
    }

    /// The period this transaction falls in
    pub fn period(&self) -> Period {
        Period::from_date(self.date)
    }

    /// Whether this record can take part in sums
    ///
    /// Records loaded from disk bypass validation, so the amount and the
    /// year are checked again here.
    pub fn is_countable(&self) -> bool {
        self.amount.is_summable() && Period::YEARS.contains(&self.date.year())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// User-submitted transaction fields, before admission to the store
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
}

impl TransactionInput {
    /// Check the input against the known category names
    ///
    /// `"Other"` is always accepted, even when it has been deleted.
    pub fn validate<'a, I>(self, known_categories: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let amount = require_positive(self.amount)?;
        let description = require_text(&self.description, "Description")?;
        let category = require_text(&self.category, "Category")?;

        let known = category == OTHER_CATEGORY
            || known_categories.into_iter().any(|name| name == category);
        if !known {
            return Err(ValidationError::UnknownCategory(category));
        }

        Ok(Self {
            amount,
            date: self.date,
            description,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: i64, category: &str) -> TransactionInput {
        TransactionInput {
            amount: Money::from_major(amount),
            date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            description: "  Groceries run ".into(),
            category: category.into(),
        }
    }

    #[test]
    fn test_validate_trims_and_accepts_known_category() {
        let validated = input(1200, "Food").validate(["Food", "Bills"]).unwrap();
        assert_eq!(validated.description, "Groceries run");
        assert_eq!(validated.amount, Money::from_major(1200));
    }

    #[test]
    fn test_validate_always_accepts_other() {
        assert!(input(10, "Other").validate(std::iter::empty()).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        assert_eq!(
            input(10, "Travel").validate(["Food"]),
            Err(ValidationError::UnknownCategory("Travel".into()))
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        assert_eq!(
            input(0, "Food").validate(["Food"]),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            input(-5, "Food").validate(["Food"]),
            Err(ValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_validate_rejects_blank_description() {
        let mut blank = input(10, "Food");
        blank.description = "   ".into();
        assert_eq!(
            blank.validate(["Food"]),
            Err(ValidationError::MissingField("Description"))
        );
    }

    #[test]
    fn test_apply_updates_fields() {
        let mut txn = Transaction::new(input(10, "Food").validate(["Food"]).unwrap());
        let created = txn.created_at;
        txn.apply(input(25, "Other").validate(["Food"]).unwrap());

        assert_eq!(txn.amount, Money::from_major(25));
        assert_eq!(txn.category, "Other");
        assert_eq!(txn.created_at, created);
        assert_eq!(txn.period().to_string(), "2024-06");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(input(10, "Food").validate(["Food"]).unwrap());
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"date\":\"2024-06-05\""));
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
