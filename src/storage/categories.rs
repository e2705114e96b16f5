//! Category repository
//!
//! Manages loading and saving categories to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};
use super::lock_error;

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

fn sort_by_creation(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: CategoryData = read_json(&self.path)?;
        let mut categories = self.categories.write().map_err(lock_error)?;

        categories.clear();
        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        let data = CategoryData {
            categories: self.get_all()?,
        };
        write_json_atomic(&self.path, &data)
    }

    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, FinanceError> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories.get(&id).cloned())
    }

    /// All categories in the order they were created
    pub fn get_all(&self) -> Result<Vec<Category>, FinanceError> {
        let categories = self.categories.read().map_err(lock_error)?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        sort_by_creation(&mut list);
        Ok(list)
    }

    /// Get a category by exact name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, FinanceError> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    /// Find a category by name (case-insensitive), full ID, or short ID
    pub fn find(&self, identifier: &str) -> Result<Option<Category>, FinanceError> {
        if let Some(category) = self.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        let categories = self.categories.read().map_err(lock_error)?;
        let lower = identifier.to_lowercase();
        if let Some(category) = categories.values().find(|c| c.name.to_lowercase() == lower) {
            return Ok(Some(category.clone()));
        }

        let mut matches = categories.values().filter(|c| c.id.matches_short(identifier));
        match (matches.next(), matches.next()) {
            (Some(category), None) => Ok(Some(category.clone())),
            _ => Ok(None),
        }
    }

    /// Category names in creation order
    pub fn names(&self) -> Result<Vec<String>, FinanceError> {
        Ok(self.get_all()?.into_iter().map(|c| c.name).collect())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), FinanceError> {
        let mut categories = self.categories.write().map_err(lock_error)?;
        categories.insert(category.id, category);
        Ok(())
    }

    /// Delete a category, returning whether it existed
    pub fn delete(&self, id: CategoryId) -> Result<bool, FinanceError> {
        let mut categories = self.categories.write().map_err(lock_error)?;
        Ok(categories.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let categories = self.categories.read().map_err(lock_error)?;
        Ok(categories.len())
    }
}
