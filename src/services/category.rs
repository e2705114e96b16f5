//! Category service
//!
//! Keeps category names unique. Transactions and budgets refer to
//! categories by name, so renaming or deleting a category leaves their
//! records as they are.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, CategoryId, CategoryInput};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn ensure_unique(&self, name: &str, except: Option<CategoryId>) -> FinanceResult<()> {
        if let Some(existing) = self.storage.categories.get_by_name(name)? {
            if Some(existing.id) != except {
                return Err(FinanceError::Duplicate {
                    entity_type: "Category",
                    identifier: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Create a new category
    pub fn create(&self, input: CategoryInput) -> FinanceResult<Category> {
        let input = input.validate()?;
        self.ensure_unique(&input.name, None)?;

        let category = Category::new(input);
        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;
        tracing::info!(name = %category.name, color = %category.color, "category created");

        Ok(category)
    }

    /// Find a category by name or ID
    pub fn find(&self, identifier: &str) -> FinanceResult<Category> {
        self.storage
            .categories
            .find(identifier)?
            .ok_or_else(|| FinanceError::category_not_found(identifier))
    }

    pub fn list(&self) -> FinanceResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Number of transactions filed under a category name
    pub fn usage(&self, name: &str) -> FinanceResult<usize> {
        self.storage.transactions.count_for_category(name)
    }

    /// Change a category's name and/or color
    pub fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        color: Option<&str>,
    ) -> FinanceResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| FinanceError::category_not_found(id.to_string()))?;

        let input = CategoryInput {
            name: name.unwrap_or(&category.name).to_string(),
            color: color.unwrap_or(&category.color).to_string(),
        }
        .validate()?;
        self.ensure_unique(&input.name, Some(id))?;

        if input.name != category.name {
            let orphaned = self.usage(&category.name)?;
            if orphaned > 0 {
                tracing::warn!(
                    from = %category.name,
                    to = %input.name,
                    transactions = orphaned,
                    "renamed category; existing transactions keep the old name"
                );
            }
        }

        category.name = input.name;
        category.color = input.color;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;
        tracing::info!(name = %category.name, "category updated");

        Ok(category)
    }

    /// Delete a category
    ///
    /// Deleting "Other" is allowed; it is recreated the next time the store
    /// is bootstrapped.
    pub fn delete(&self, id: CategoryId) -> FinanceResult<Category> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| FinanceError::category_not_found(id.to_string()))?;

        if category.is_other() {
            tracing::warn!("deleting the \"Other\" category; it will be recreated on next start");
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;
        tracing::info!(name = %category.name, "category deleted");

        Ok(category)
    }
}
