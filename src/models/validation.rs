//! Input validation shared by all record kinds
//!
//! Every record passes through one of the `validate` functions before the
//! store admits it. Validation never panics: it yields either the cleaned
//! record or the reason it was refused.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::money::Money;
use super::period::Period;

/// Why a record was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank
    MissingField(&'static str),
    /// Amount is zero or negative
    NonPositiveAmount,
    /// Amount is above [`Money::MAX`]
    AmountTooLarge,
    /// Amount could not be read as a number
    InvalidAmount(String),
    /// Date is not a valid `YYYY-MM-DD` calendar day
    InvalidDate(String),
    /// Period is not a valid `YYYY-MM` month
    InvalidPeriod(String),
    /// Transaction names a category that does not exist
    UnknownCategory(String),
    /// Color is not a `#rgb` / `#rrggbb` hex string
    InvalidColor(String),
    /// Name exceeds the maximum length
    NameTooLong(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{} is required", field),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountTooLarge => write!(f, "Amount must not exceed {}", Money::MAX),
            Self::InvalidAmount(s) => write!(f, "Amount must be a positive number: {}", s),
            Self::InvalidDate(s) => write!(f, "Invalid date (expected YYYY-MM-DD): {}", s),
            Self::InvalidPeriod(s) => write!(f, "Invalid period (expected YYYY-MM): {}", s),
            Self::UnknownCategory(s) => write!(f, "Invalid category: {}", s),
            Self::InvalidColor(s) => write!(f, "Invalid color (expected #rrggbb): {}", s),
            Self::NameTooLong(len) => {
                write!(f, "Name too long ({} characters, max {})", len, MAX_NAME_LEN)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 50;

/// Parse a user-supplied amount, refusing zero and negatives
pub fn parse_amount(s: &str) -> Result<Money, ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::MissingField("Amount"));
    }
    let amount = Money::parse(s).map_err(|_| ValidationError::InvalidAmount(s.trim().to_string()))?;
    require_positive(amount)
}

/// Refuse zero, negative and oversized amounts
pub fn require_positive(amount: Money) -> Result<Money, ValidationError> {
    if !amount.is_positive() {
        Err(ValidationError::NonPositiveAmount)
    } else if amount > Money::MAX {
        Err(ValidationError::AmountTooLarge)
    } else {
        Ok(amount)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("Date"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .filter(|date| Period::YEARS.contains(&date.year()))
        .ok_or_else(|| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Trim a text field and refuse it if blank
pub fn require_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Normalize a hex color to lowercase, refusing anything else
pub fn normalize_color(color: &str) -> Result<String, ValidationError> {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("Color"));
    }

    let valid = trimmed
        .strip_prefix('#')
        .map(|hex| (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);

    if valid {
        Ok(trimmed.to_ascii_lowercase())
    } else {
        Err(ValidationError::InvalidColor(trimmed.to_string()))
    }
}
