//! Dashboard summary
//!
//! The headline figures over all recorded spending.

use serde::Serialize;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::models::money::as_major;
use crate::models::{Money, Transaction};
use crate::storage::Storage;

use super::aggregate::{category_totals, total_spent, CategoryPalette, CategoryTotal};

const TOP_CATEGORY_COUNT: usize = 3;
const RECENT_COUNT: usize = 5;

/// Headline figures for the dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(with = "as_major")]
    pub total: Money,
    pub transaction_count: usize,
    /// Largest categories, biggest first
    pub top_categories: Vec<CategoryTotal>,
    /// Newest transactions, by date then entry time
    pub recent: Vec<Transaction>,
    #[serde(skip)]
    currency_symbol: String,
}

impl DashboardSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self::with_palette(transactions, &CategoryPalette::default())
    }

    pub fn with_palette(transactions: &[Transaction], palette: &CategoryPalette) -> Self {
        let mut top_categories = category_totals(transactions, palette);
        top_categories.truncate(TOP_CATEGORY_COUNT);

        let mut recent = transactions.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        recent.truncate(RECENT_COUNT);

        Self {
            total: total_spent(transactions),
            transaction_count: transactions.iter().filter(|t| t.is_countable()).count(),
            top_categories,
            recent,
            currency_symbol: String::new(),
        }
    }

    /// Summarize everything in the store
    pub fn generate(storage: &Storage, settings: &Settings) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let palette = CategoryPalette::from_categories(&storage.categories.get_all()?)
            .with_fallback(&settings.default_color);

        let mut summary = Self::with_palette(&transactions, &palette);
        summary.currency_symbol = settings.currency_symbol.clone();
        Ok(summary)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let symbol = &self.currency_symbol;
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Transactions:   {}\n\n", self.transaction_count));

        output.push_str("Top Categories\n");
        if self.top_categories.is_empty() {
            output.push_str("  No data\n");
        }
        for entry in &self.top_categories {
            output.push_str(&format!(
                "  {:<24} {:>12} {:>7.1}%\n",
                entry.category,
                entry.total.format_with_symbol(symbol),
                entry.percentage
            ));
        }

        output.push_str("\nRecent Transactions\n");
        if self.recent.is_empty() {
            output.push_str("  No transactions\n");
        }
        for txn in &self.recent {
            output.push_str(&format!(
                "  {}  {:<28} {:<14} {:>12}\n",
                txn.date,
                txn.description,
                txn.category,
                txn.amount.format_with_symbol(symbol)
            ));
        }

        output
    }
}
