//! Reports for finance-visualizer
//!
//! Everything here reads a snapshot of the store and derives views from
//! it: category and monthly totals, budget-vs-actual comparison, spending
//! insights and the dashboard summary. Nothing in this module writes.

pub mod aggregate;
pub mod comparison;
pub mod insights;
pub mod summary;

pub use aggregate::{
    aggregate_by_category, aggregate_by_month, category_totals, filter_by_period, monthly_totals,
    total_spent, CategoryPalette, CategoryTotal, MonthlyTotal,
};
pub use comparison::{compare_budget_to_actual, BudgetComparisonReport, ComparisonReportRow, ComparisonRow};
pub use insights::{
    compute_insights, Insight, InsightContext, InsightEngine, InsightKind, InsightReport,
    InsightRule, Severity,
};
pub use summary::DashboardSummary;

/// Chart color for categories without a color of their own
pub const DEFAULT_COLOR: &str = "#8884d8";

/// Chart color for spending in a category that has no budget
pub const UNBUDGETED_COLOR: &str = "#ff6b6b";
