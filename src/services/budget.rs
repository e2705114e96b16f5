//! Budget service
//!
//! Setting a budget for a (category, month) pair that already has one
//! changes its amount instead of adding a second budget.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetId, BudgetInput, Money, Period};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create or overwrite the budget for a category and month
    pub fn set(&self, input: BudgetInput) -> FinanceResult<Budget> {
        let input = input.validate()?;

        let budget = match self.storage.budgets.get_for(&input.category, input.month)? {
            Some(mut existing) => {
                existing.set_amount(input.amount);
                tracing::info!(category = %existing.category, month = %existing.month, amount = %existing.amount, "budget updated");
                existing
            }
            None => {
                if self.storage.categories.get_by_name(&input.category)?.is_none() {
                    tracing::debug!(category = %input.category, "budget for a category not in the list");
                }
                let budget = Budget::new(input);
                tracing::info!(category = %budget.category, month = %budget.month, amount = %budget.amount, "budget created");
                budget
            }
        };

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Change the amount of an existing budget
    pub fn update_amount(&self, id: BudgetId, amount: Money) -> FinanceResult<Budget> {
        let mut budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FinanceError::budget_not_found(id.to_string()))?;

        let input = BudgetInput {
            category: budget.category.clone(),
            month: budget.month,
            amount,
        }
        .validate()?;
        budget.set_amount(input.amount);

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        Ok(budget)
    }

    /// Find a budget by full or short ID
    pub fn find(&self, identifier: &str) -> FinanceResult<Budget> {
        self.storage
            .budgets
            .find(identifier)?
            .ok_or_else(|| FinanceError::budget_not_found(identifier))
    }

    /// Budgets, optionally for one month, latest first
    pub fn list(&self, month: Option<Period>) -> FinanceResult<Vec<Budget>> {
        self.storage.budgets.list(month)
    }

    pub fn delete(&self, id: BudgetId) -> FinanceResult<Budget> {
        let budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FinanceError::budget_not_found(id.to_string()))?;

        self.storage.budgets.delete(id)?;
        self.storage.budgets.save()?;
        tracing::info!(category = %budget.category, month = %budget.month, "budget deleted");

        Ok(budget)
    }
}
