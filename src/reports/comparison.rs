//! Budget vs. actual comparison
//!
//! One row per budget in the period, plus a row with a zero budget for
//! every category that has spending but no budget.

use std::collections::HashSet;
use std::io::Write;

use serde::Serialize;

use crate::config::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::money::as_major;
use crate::models::{Budget, Money, Period, Transaction};
use crate::storage::Storage;

use super::aggregate::{aggregate_by_category, filter_by_period, CategoryPalette};

/// Budgeted and spent amounts for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub category: String,
    #[serde(with = "as_major")]
    pub budget: Money,
    #[serde(with = "as_major")]
    pub actual: Money,
    /// `actual - budget`; positive means overspent
    #[serde(with = "as_major")]
    pub difference: Money,
    /// `actual / budget * 100`, or 0 without a budget
    pub percentage: f64,
}

impl ComparisonRow {
    fn new(category: String, budget: Money, actual: Money) -> Self {
        Self {
            category,
            budget,
            actual,
            difference: actual - budget,
            percentage: actual.percent_of(budget),
        }
    }

    /// Whether this row stands for spending without a budget
    pub fn is_unbudgeted(&self) -> bool {
        self.budget.is_zero()
    }

    pub fn is_over(&self) -> bool {
        self.difference.is_positive() && !self.is_unbudgeted()
    }
}

/// Compare the budgets of a period with what was spent in it
///
/// Budgets for other months are ignored, as are transactions dated
/// outside the period. Rows are ordered by budget, largest first; rows
/// with equal budgets keep their input order, and unbudgeted rows come
/// last in name order.
pub fn compare_budget_to_actual(
    budgets: &[Budget],
    transactions: &[Transaction],
    period: Period,
) -> Vec<ComparisonRow> {
    let spent = aggregate_by_category(&filter_by_period(transactions, period));

    let mut budgeted = HashSet::new();
    let mut rows = Vec::new();
    for budget in budgets.iter().filter(|b| b.month == period) {
        if !budget.is_countable() {
            tracing::debug!(id = %budget.id, category = %budget.category, amount = %budget.amount, "skipping budget that cannot be summed");
            continue;
        }
        budgeted.insert(budget.category.as_str());
        let actual = spent.get(&budget.category).copied().unwrap_or_default();
        rows.push(ComparisonRow::new(budget.category.clone(), budget.amount, actual));
    }
    rows.sort_by(|a, b| b.budget.cmp(&a.budget));

    let mut unbudgeted: Vec<_> = spent
        .iter()
        .filter(|(category, _)| !budgeted.contains(category.as_str()))
        .map(|(category, actual)| ComparisonRow::new(category.clone(), Money::zero(), *actual))
        .collect();
    unbudgeted.sort_by(|a, b| a.category.cmp(&b.category));

    rows.extend(unbudgeted);
    rows
}

/// A comparison row with its chart color
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReportRow {
    #[serde(flatten)]
    pub row: ComparisonRow,
    pub color: String,
}

/// Budget vs. actual for one month
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparisonReport {
    pub period: Period,
    pub rows: Vec<ComparisonReportRow>,
    #[serde(with = "as_major")]
    pub total_budget: Money,
    #[serde(with = "as_major")]
    pub total_actual: Money,
    #[serde(with = "as_major")]
    pub total_difference: Money,
    #[serde(skip)]
    currency_symbol: String,
}

impl BudgetComparisonReport {
    /// Generate the comparison for a period from the store
    pub fn generate(storage: &Storage, period: Period, settings: &Settings) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_by_period(period)?;
        let budgets = storage.budgets.list(Some(period))?;
        let categories = storage.categories.get_all()?;

        let budgeted_palette =
            CategoryPalette::from_categories(&categories).with_fallback(&settings.default_color);
        let unbudgeted_palette =
            CategoryPalette::from_categories(&categories).with_fallback(&settings.unbudgeted_color);

        let rows: Vec<_> = compare_budget_to_actual(&budgets, &transactions, period)
            .into_iter()
            .map(|row| {
                let palette = if row.is_unbudgeted() {
                    &unbudgeted_palette
                } else {
                    &budgeted_palette
                };
                ComparisonReportRow {
                    color: palette.color_for(&row.category).to_string(),
                    row,
                }
            })
            .collect();

        let total_budget: Money = rows.iter().map(|r| r.row.budget).sum();
        let total_actual: Money = rows.iter().map(|r| r.row.actual).sum();

        Ok(Self {
            period,
            rows,
            total_budget,
            total_actual,
            total_difference: total_actual - total_budget,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let symbol = &self.currency_symbol;
        let mut output = String::new();

        output.push_str(&format!("Budget vs Actual: {}\n", self.period.long_label()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets or spending for this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12} {:>8}\n",
            "Category", "Budget", "Actual", "Difference", "Used"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for ComparisonReportRow { row, .. } in &self.rows {
            let used = if row.is_unbudgeted() {
                "-".to_string()
            } else {
                format!("{:.1}%", row.percentage)
            };
            let flag = if row.is_over() {
                "  OVER"
            } else if row.is_unbudgeted() {
                "  unbudgeted"
            } else {
                ""
            };
            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>12} {:>8}{}\n",
                row.category,
                row.budget.format_with_symbol(symbol),
                row.actual.format_with_symbol(symbol),
                row.difference.format_with_symbol(symbol),
                used,
                flag
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12}\n",
            "TOTAL",
            self.total_budget.format_with_symbol(symbol),
            self.total_actual.format_with_symbol(symbol),
            self.total_difference.format_with_symbol(symbol)
        ));

        output
    }

    /// Export the report rows to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FinanceResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| FinanceError::Export(e.to_string());

        csv.write_record(["Month", "Category", "Budget", "Actual", "Difference", "Percentage", "Color"])
            .map_err(export_err)?;

        let month = self.period.to_string();
        for ComparisonReportRow { row, color } in &self.rows {
            csv.write_record([
                month.clone(),
                row.category.clone(),
                format!("{:.2}", row.budget.as_f64()),
                format!("{:.2}", row.actual.as_f64()),
                format!("{:.2}", row.difference.as_f64()),
                format!("{:.2}", row.percentage),
                color.clone(),
            ])
            .map_err(export_err)?;
        }

        csv.flush().map_err(|e| FinanceError::Export(e.to_string()))?;
        Ok(())
    }
}
