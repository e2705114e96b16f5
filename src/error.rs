//! Error type shared by the library
//!
//! Reports never fail on bad data; these errors come from the store, the
//! validation step in front of it, and the exporters.

use thiserror::Error;

use crate::models::ValidationError;

#[derive(Error, Debug)]
pub enum FinanceError {
    /// Settings or data directory could not be resolved or read
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// A record was refused before reaching the store
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Collection file unreadable, unwritable, or a poisoned lock
    #[error("Storage error: {0}")]
    Storage(String),

    /// Report or data export could not be written
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    fn not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Category", identifier)
    }

    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Transaction", identifier)
    }

    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Budget", identifier)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ValidationError> for FinanceError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = FinanceError::budget_not_found("bud-1234abcd");
        assert_eq!(err.to_string(), "Budget not found: bud-1234abcd");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err: FinanceError = ValidationError::UnknownCategory("Travel".into()).into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Invalid category: Travel");
    }

    #[test]
    fn test_duplicate_message() {
        let err = FinanceError::Duplicate {
            entity_type: "Category",
            identifier: "Food".into(),
        };
        assert_eq!(err.to_string(), "Category already exists: Food");
    }

    #[test]
    fn test_io_conversion() {
        let err: FinanceError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, FinanceError::Io(ref msg) if msg == "denied"));
    }
}
