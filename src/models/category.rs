//! Category model
//!
//! A named, colored tag attached to transactions and budgets. The "Other"
//! category always exists after bootstrap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::validation::{normalize_color, require_text, ValidationError, MAX_NAME_LEN};

/// Name of the always-present fallback category
pub const OTHER_CATEGORY: &str = "Other";

/// Color of the "Other" category when it is (re)created
pub const OTHER_COLOR: &str = "#8884d8";

/// Categories seeded on first run, alongside "Other"
pub const DEFAULT_CATEGORIES: [(&str, &str); 6] = [
    ("Food", "#ff6b6b"),
    ("Transport", "#4ecdc4"),
    ("Shopping", "#45b7d1"),
    ("Bills", "#96ceb4"),
    ("Entertainment", "#feca57"),
    ("Health", "#ff9ff3"),
];

/// A spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name, unique across categories
    pub name: String,

    /// Chart color (`#rrggbb`)
    pub color: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a category from already-validated input
    pub fn new(input: CategoryInput) -> Self {
        Self {
            id: CategoryId::new(),
            name: input.name,
            color: input.color,
            created_at: Utc::now(),
        }
    }

    /// The fallback "Other" category
    pub fn other() -> Self {
        Self::new(CategoryInput {
            name: OTHER_CATEGORY.into(),
            color: OTHER_COLOR.into(),
        })
    }

    /// Whether this is the "Other" category
    pub fn is_other(&self) -> bool {
        self.name == OTHER_CATEGORY
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// User-submitted category fields
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInput {
    pub name: String,
    pub color: String,
}

impl CategoryInput {
    /// Check the name and color. Uniqueness needs the store and is checked
    /// by the category service.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let name = require_text(&self.name, "Name")?;
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong(len));
        }

        Ok(Self {
            name,
            color: normalize_color(&self.color)?,
        })
    }
}
