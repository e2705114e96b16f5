//! Record identifiers
//!
//! Each record kind gets its own uuid newtype. `Display` shows a short,
//! prefixed form (`txn-1a2b3c4d`) that the CLI accepts back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hex digits of the uuid shown in the short form
const SHORT_LEN: usize = 8;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident => $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// True if `s` is this id's short form, a prefix of its uuid,
            /// or the full uuid, with or without the kind prefix
            pub fn matches_short(&self, s: &str) -> bool {
                let s = s.trim();
                let s = s.strip_prefix($prefix).unwrap_or(s);
                !s.is_empty() && self.0.to_string().starts_with(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let full = self.0.simple().to_string();
                write!(f, "{}{}", $prefix, &full[..SHORT_LEN])
            }
        }

        /// Parses a full uuid, optionally carrying the kind prefix
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Uuid::parse_str(s.strip_prefix($prefix).unwrap_or(s)).map(Self)
            }
        }
    };
}

record_id!(
    /// Identifies a transaction
    TransactionId => "txn-"
);
record_id!(
    /// Identifies a budget
    BudgetId => "bud-"
);
record_id!(
    /// Identifies a category
    CategoryId => "cat-"
);
