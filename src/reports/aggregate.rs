//! Spending aggregation
//!
//! Group-by sums over transactions. Records that cannot be summed (a
//! non-positive or oversized amount, a year outside 0-9999) are skipped
//! and logged, never fatal.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::money::as_major;
use crate::models::{Category, Money, Period, Transaction};

use super::DEFAULT_COLOR;

fn countable(txn: &Transaction) -> bool {
    if txn.is_countable() {
        true
    } else {
        tracing::debug!(id = %txn.id, amount = %txn.amount, date = %txn.date, "skipping transaction that cannot be summed");
        false
    }
}

/// Total spent per category name
///
/// One entry per distinct category present in the input.
pub fn aggregate_by_category(transactions: &[Transaction]) -> HashMap<String, Money> {
    let mut totals: HashMap<String, Money> = HashMap::new();
    for txn in transactions.iter().filter(|t| countable(t)) {
        *totals.entry(txn.category.clone()).or_default() += txn.amount;
    }
    totals
}

/// Total spent per month, keyed by `YYYY-MM`
///
/// Keys are zero-padded, so map order is calendar order.
pub fn aggregate_by_month(transactions: &[Transaction]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| countable(t)) {
        *totals.entry(txn.period().to_string()).or_default() += txn.amount;
    }
    totals
}

/// Transactions whose date falls in the given month
pub fn filter_by_period(transactions: &[Transaction], period: Period) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| period.contains(t.date))
        .cloned()
        .collect()
}

/// Sum of all countable transactions
pub fn total_spent(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| countable(t))
        .map(|t| t.amount)
        .sum()
}

/// Category name to chart color lookup
#[derive(Debug, Clone)]
pub struct CategoryPalette {
    colors: HashMap<String, String>,
    fallback: String,
}

impl CategoryPalette {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            colors: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn from_categories(categories: &[Category]) -> Self {
        let mut palette = Self::default();
        for category in categories {
            palette.insert(&category.name, &category.color);
        }
        palette
    }

    /// Replace the color used for unknown categories
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn insert(&mut self, name: &str, color: &str) {
        self.colors.insert(name.to_string(), color.to_string());
    }

    /// Color for a category, falling back when it is unknown
    pub fn color_for(&self, name: &str) -> &str {
        self.colors.get(name).map_or(self.fallback.as_str(), String::as_str)
    }

    /// Color for a category if it has one of its own
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    #[serde(with = "as_major")]
    pub total: Money,
    pub color: String,
    /// Share of all spending, 0-100
    pub percentage: f64,
}

/// Category breakdown, largest first
pub fn category_totals(transactions: &[Transaction], palette: &CategoryPalette) -> Vec<CategoryTotal> {
    let by_category = aggregate_by_category(transactions);
    let grand_total: Money = by_category.values().sum();

    let mut totals: Vec<_> = by_category
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            color: palette.color_for(&category).to_string(),
            percentage: total.percent_of(grand_total),
            category,
            total,
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    totals
}

/// One bar of the monthly chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    pub month: Period,
    #[serde(with = "as_major")]
    pub total: Money,
    pub label: String,
}

/// Spending per month in calendar order
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut by_period: BTreeMap<Period, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| countable(t)) {
        *by_period.entry(txn.period()).or_default() += txn.amount;
    }

    by_period
        .into_iter()
        .map(|(month, total)| MonthlyTotal {
            month,
            total,
            label: month.label(),
        })
        .collect()
}
