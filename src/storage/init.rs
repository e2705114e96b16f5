//! First-run setup
//!
//! Makes sure the "Other" category exists and seeds the starter
//! categories into an empty store. Safe to run on every start.

use crate::error::FinanceError;
use crate::models::{Category, CategoryInput, DEFAULT_CATEGORIES, OTHER_CATEGORY};

use super::Storage;

/// Bring a store up to its minimum content
///
/// - "Other" is created if missing.
/// - If "Other" is the only category, the default set is added.
///
/// Returns how many categories were created; a second run returns 0.
pub fn bootstrap(storage: &Storage) -> Result<usize, FinanceError> {
    let mut created = 0;

    if storage.categories.get_by_name(OTHER_CATEGORY)?.is_none() {
        storage.categories.upsert(Category::other())?;
        tracing::info!("created default \"{}\" category", OTHER_CATEGORY);
        created += 1;
    }

    if storage.categories.count()? <= 1 {
        let mut seeded = 0;
        for (name, color) in DEFAULT_CATEGORIES {
            if storage.categories.get_by_name(name)?.is_some() {
                continue;
            }
            storage.categories.upsert(Category::new(CategoryInput {
                name: name.into(),
                color: color.into(),
            }))?;
            seeded += 1;
        }
        if seeded > 0 {
            tracing::info!(count = seeded, "seeded default categories");
        }
        created += seeded;
    }

    if created > 0 {
        storage.categories.save()?;
    }

    Ok(created)
}
