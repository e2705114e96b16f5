//! Category and budget display formatting

use crate::models::{Budget, Category};

use super::chart::truncate;

/// Format categories with the number of transactions filed under each
pub fn format_category_list(categories: &[(Category, usize)]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<24} {:<9} {:>12}\n", "Name", "Color", "Transactions"));
    output.push_str(&"-".repeat(47));
    output.push('\n');

    for (category, count) in categories {
        output.push_str(&format!(
            "{:<24} {:<9} {:>12}\n",
            truncate(&category.name, 24),
            category.color,
            count
        ));
    }

    output
}

/// Format budgets as a list
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<8} {:<24} {:>12}\n",
        "ID", "Month", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for budget in budgets {
        output.push_str(&format!(
            "{:<13} {:<8} {:<24} {:>12}\n",
            budget.id.to_string(),
            budget.month.to_string(),
            truncate(&budget.category, 24),
            budget.amount.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetInput, Money, Period};

    #[test]
    fn test_category_list() {
        let list = format_category_list(&[(Category::other(), 3)]);
        assert!(list.contains("Other"));
        assert!(list.contains("#8884d8"));
    }

    #[test]
    fn test_budget_list() {
        let budget = Budget::new(BudgetInput {
            category: "Food".into(),
            month: Period::new(2024, 6).unwrap(),
            amount: Money::from_major(100000),
        });
        let list = format_budget_list(&[budget], "₹");
        assert!(list.contains("2024-06"));
        assert!(list.contains("₹1,00,000"));
        assert_eq!(format_budget_list(&[], ""), "No budgets found.\n");
    }
}
