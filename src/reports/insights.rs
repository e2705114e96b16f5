//! Spending insights
//!
//! A fixed, ordered set of rules run over one month of spending, the month
//! before it, and the month's budgets. Each rule looks at the shared
//! [`InsightContext`] only, so no rule depends on what another emitted.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::models::{Budget, Money, Period, Transaction};
use crate::storage::Storage;

/// Total usage above this is a warning
const BUDGET_WARNING_PERCENT: f64 = 80.0;
/// Per-category usage above this is a warning
const CATEGORY_WARNING_PERCENT: f64 = 90.0;
/// Month-over-month changes at or below this are noise
const TREND_MIN_CHANGE_PERCENT: f64 = 5.0;
/// Share of spending that makes a category "top"
const TOP_CATEGORY_PERCENT: f64 = 40.0;
/// Fraction of days with spending that counts as frequent
const FREQUENT_DAYS_RATIO: f64 = 0.8;
/// Average transaction growth that counts as a jump
const AVERAGE_JUMP_RATIO: f64 = 1.2;

/// How urgent an insight is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        };
        write!(f, "{}", label)
    }
}

/// Which rule produced an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightKind {
    BudgetUsage,
    MonthOverMonth,
    CategoryBudget,
    TopCategory,
    SpendingFrequency,
    AverageTransaction,
}

/// An advisory message about the month's spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            title: title.into(),
            description: description.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.title, self.description)?;
        if let Some(value) = &self.value {
            write!(f, " ({})", value)?;
        }
        Ok(())
    }
}

/// Figures shared by all rules, computed once per run
#[derive(Debug)]
pub struct InsightContext<'a> {
    pub period: Period,
    /// Countable transactions dated in `period`
    pub current: Vec<&'a Transaction>,
    /// Countable transactions dated in the month before `period`
    pub previous: Vec<&'a Transaction>,
    /// Budgets for `period` with a positive amount
    pub budgets: Vec<&'a Budget>,
    /// Current spending per category
    pub spending: HashMap<String, Money>,
    pub total: Money,
    pub previous_total: Money,
    pub total_budget: Money,
    currency_symbol: String,
}

impl<'a> InsightContext<'a> {
    pub fn new(
        current: &'a [Transaction],
        previous: &'a [Transaction],
        budgets: &'a [Budget],
        period: Period,
        currency_symbol: &str,
    ) -> Self {
        let prev_period = period.prev();
        let current: Vec<_> = current
            .iter()
            .filter(|t| t.is_countable() && period.contains(t.date))
            .collect();
        let previous: Vec<_> = previous
            .iter()
            .filter(|t| t.is_countable() && prev_period.contains(t.date))
            .collect();
        let budgets: Vec<_> = budgets
            .iter()
            .filter(|b| b.month == period && b.is_countable())
            .collect();

        let mut spending: HashMap<String, Money> = HashMap::new();
        for txn in &current {
            *spending.entry(txn.category.clone()).or_default() += txn.amount;
        }

        Self {
            period,
            total: current.iter().map(|t| t.amount).sum(),
            previous_total: previous.iter().map(|t| t.amount).sum(),
            total_budget: budgets.iter().map(|b| b.amount).sum(),
            current,
            previous,
            budgets,
            spending,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn spent_on(&self, category: &str) -> Money {
        self.spending.get(category).copied().unwrap_or_default()
    }
}

/// One check over a month of spending
pub trait InsightRule {
    fn kind(&self) -> InsightKind;

    /// Evaluate the rule; most rules emit at most one insight
    fn evaluate(&self, ctx: &InsightContext<'_>) -> Vec<Insight>;
}

/// Overall budget usage
#[derive(Debug, Default)]
pub struct BudgetUsageRule;

impl InsightRule for BudgetUsageRule {
    fn kind(&self) -> InsightKind {
        InsightKind::BudgetUsage
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Vec<Insight> {
        if !ctx.total_budget.is_positive() {
            return Vec::new();
        }

        let usage = ctx.total.percent_of(ctx.total_budget);
        let remaining = ctx.total_budget - ctx.total;
        let insight = if usage > 100.0 {
            Insight::new(
                self.kind(),
                Severity::Danger,
                "Budget Exceeded",
                format!("You've spent {:.1}% of your total budget this month", usage),
            )
            .with_value(format!("{} over budget", ctx.money(-remaining)))
        } else if usage > BUDGET_WARNING_PERCENT {
            Insight::new(
                self.kind(),
                Severity::Warning,
                "Approaching Budget Limit",
                format!("You've used {:.1}% of your total budget", usage),
            )
            .with_value(format!("{} remaining", ctx.money(remaining)))
        } else {
            Insight::new(
                self.kind(),
                Severity::Success,
                "Budget on Track",
                format!("You've used {:.1}% of your total budget", usage),
            )
            .with_value(format!("{} remaining", ctx.money(remaining)))
        };

        vec![insight]
    }
}

/// Change in total spending against the previous month
#[derive(Debug, Default)]
pub struct MonthOverMonthRule;

impl InsightRule for MonthOverMonthRule {
    fn kind(&self) -> InsightKind {
        InsightKind::MonthOverMonth
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Vec<Insight> {
        if !ctx.previous_total.is_positive() {
            return Vec::new();
        }

        let delta = ctx.total - ctx.previous_total;
        let change = delta.percent_of(ctx.previous_total);
        if change.abs() <= TREND_MIN_CHANGE_PERCENT {
            return Vec::new();
        }

        let (severity, title, direction) = if change > 0.0 {
            (Severity::Warning, "Spending Increased", "increase")
        } else {
            (Severity::Success, "Spending Decreased", "decrease")
        };

        vec![Insight::new(
            self.kind(),
            severity,
            title,
            format!("{:.1}% {} from last month", change.abs(), direction),
        )
        .with_value(format!("{} difference", ctx.money(delta.abs())))]
    }
}

/// Usage of each category budget
#[derive(Debug, Default)]
pub struct CategoryBudgetRule;

impl InsightRule for CategoryBudgetRule {
    fn kind(&self) -> InsightKind {
        InsightKind::CategoryBudget
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Vec<Insight> {
        let mut insights = Vec::new();

        for budget in &ctx.budgets {
            let spent = ctx.spent_on(&budget.category);
            let usage = spent.percent_of(budget.amount);
            let description = format!("{:.1}% of budget used", usage);

            if usage > 100.0 {
                insights.push(
                    Insight::new(
                        self.kind(),
                        Severity::Danger,
                        format!("{} Over Budget", budget.category),
                        description,
                    )
                    .with_value(format!("{} over", ctx.money(spent - budget.amount))),
                );
            } else if usage > CATEGORY_WARNING_PERCENT {
                insights.push(
                    Insight::new(
                        self.kind(),
                        Severity::Warning,
                        format!("{} Nearly Exhausted", budget.category),
                        description,
                    )
                    .with_value(format!("{} left", ctx.money(budget.amount - spent))),
                );
            }
        }

        insights
    }
}

/// A single category taking most of the spending
#[derive(Debug, Default)]
pub struct TopCategoryRule;

impl InsightRule for TopCategoryRule {
    fn kind(&self) -> InsightKind {
        InsightKind::TopCategory
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Vec<Insight> {
        if !ctx.total.is_positive() {
            return Vec::new();
        }

        // Highest spend; equal spends go to the name that sorts first
        let top = ctx
            .spending
            .iter()
            .max_by(|(a_name, a), (b_name, b)| a.cmp(b).then_with(|| b_name.cmp(a_name)));

        let Some((category, amount)) = top else {
            return Vec::new();
        };

        let share = amount.percent_of(ctx.total);
        if share <= TOP_CATEGORY_PERCENT {
            return Vec::new();
        }

        vec![Insight::new(
            self.kind(),
            Severity::Info,
            "Top Spending Category",
            format!("{} accounts for {:.1}% of your spending", category, share),
        )
        .with_value(ctx.money(*amount))]
    }
}

/// Spending on most days of the month
#[derive(Debug, Default)]
pub struct SpendingFrequencyRule;

impl InsightRule for SpendingFrequencyRule {
    fn kind(&self) -> InsightKind {
        InsightKind::SpendingFrequency
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Vec<Insight> {
        let active_days = ctx.current.iter().map(|t| t.date).collect::<HashSet<_>>().len();
        let days_in_month = ctx.period.days_in_month();
        let ratio = active_days as f64 / days_in_month as f64;

        if ratio <= FREQUENT_DAYS_RATIO {
            return Vec::new();
        }

        vec![Insight::new(
            self.kind(),
            Severity::Info,
            "Frequent Spending",
            format!(
                "You made transactions on {} out of {} days",
                active_days, days_in_month
            ),
        )
        .with_value(format!("{:.1}% of days", ratio * 100.0))]
    }
}

/// Average transaction size growing against the previous month
#[derive(Debug, Default)]
pub struct AverageTransactionRule;

impl InsightRule for AverageTransactionRule {
    fn kind(&self) -> InsightKind {
        InsightKind::AverageTransaction
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Vec<Insight> {
        if ctx.current.is_empty() {
            return Vec::new();
        }

        let average = ctx.total.cents() as f64 / ctx.current.len() as f64;
        let previous_average = ctx.previous_total.cents() as f64 / ctx.previous.len().max(1) as f64;

        if average <= previous_average * AVERAGE_JUMP_RATIO {
            return Vec::new();
        }

        let average_money = Money::from_cents(average.round() as i64);
        let description = if previous_average > 0.0 {
            format!(
                "Average transaction increased by {:.1}%",
                (average - previous_average) / previous_average * 100.0
            )
        } else {
            format!(
                "Average transaction of {} with no spending last month",
                ctx.money(average_money)
            )
        };

        vec![Insight::new(
            self.kind(),
            Severity::Warning,
            "Higher Average Spending",
            description,
        )
        .with_value(format!("{} avg", ctx.money(average_money)))]
    }
}

/// Runs the rules in order and collects what they emit
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
    currency_symbol: String,
}

impl InsightEngine {
    /// The standard rule set, amounts without a currency symbol
    pub fn new() -> Self {
        Self::with_symbol("")
    }

    /// The standard rule set, amounts prefixed with `symbol`
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            rules: vec![
                Box::new(BudgetUsageRule),
                Box::new(MonthOverMonthRule),
                Box::new(CategoryBudgetRule),
                Box::new(TopCategoryRule),
                Box::new(SpendingFrequencyRule),
                Box::new(AverageTransactionRule),
            ],
            currency_symbol: symbol.into(),
        }
    }

    /// A custom rule list, run in the given order
    pub fn with_rules(rules: Vec<Box<dyn InsightRule>>, symbol: impl Into<String>) -> Self {
        Self {
            rules,
            currency_symbol: symbol.into(),
        }
    }

    pub fn rule_kinds(&self) -> Vec<InsightKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    pub fn run(
        &self,
        current: &[Transaction],
        previous: &[Transaction],
        budgets: &[Budget],
        period: Period,
    ) -> Vec<Insight> {
        let ctx = InsightContext::new(current, previous, budgets, period, &self.currency_symbol);

        let mut insights = Vec::new();
        for rule in &self.rules {
            let emitted = rule.evaluate(&ctx);
            tracing::trace!(kind = ?rule.kind(), count = emitted.len(), "insight rule evaluated");
            insights.extend(emitted);
        }
        insights
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Insights for a month with the standard rules and no currency symbol
///
/// `current` and `previous` are the transactions of `period` and of the
/// month before it; records outside those months are ignored.
pub fn compute_insights(
    current: &[Transaction],
    previous: &[Transaction],
    budgets: &[Budget],
    period: Period,
) -> Vec<Insight> {
    InsightEngine::new().run(current, previous, budgets, period)
}

/// Insights for one month, read from the store
#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    pub period: Period,
    pub insights: Vec<Insight>,
}

impl InsightReport {
    pub fn generate(storage: &Storage, period: Period, settings: &Settings) -> FinanceResult<Self> {
        let current = storage.transactions.get_by_period(period)?;
        let previous = storage.transactions.get_by_period(period.prev())?;
        let budgets = storage.budgets.list(Some(period))?;

        let engine = InsightEngine::with_symbol(settings.currency_symbol.clone());
        let insights = engine.run(&current, &previous, &budgets, period);
        tracing::debug!(%period, count = insights.len(), "generated insights");

        Ok(Self { period, insights })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending Insights: {}\n", self.period.long_label()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.insights.is_empty() {
            output.push_str("Add some transactions and budgets to see insights.\n");
            return output;
        }

        for insight in &self.insights {
            output.push_str(&format!(
                "{:<9} {}\n",
                insight.severity.to_string().to_uppercase(),
                insight.title
            ));
            output.push_str(&format!("          {}\n", insight.description));
            if let Some(value) = &insight.value {
                output.push_str(&format!("          {}\n", value));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinvizPaths;
    use crate::models::{BudgetInput, TransactionInput};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn june() -> Period {
        Period::new(2024, 6).unwrap()
    }

    fn txn(amount: i64, date: &str, category: &str) -> Transaction {
        Transaction::new(TransactionInput {
            amount: Money::from_major(amount),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: "test".into(),
            category: category.into(),
        })
    }

    fn budget(category: &str, amount: i64) -> Budget {
        Budget::new(BudgetInput {
            category: category.into(),
            month: june(),
            amount: Money::from_major(amount),
        })
    }

    fn of_kind(insights: &[Insight], kind: InsightKind) -> Vec<&Insight> {
        insights.iter().filter(|i| i.kind == kind).collect()
    }

    #[test]
    fn test_budget_exceeded() {
        let insights = compute_insights(
            &[txn(1200, "2024-06-05", "Food")],
            &[],
            &[budget("Food", 1000)],
            june(),
        );

        let first = &insights[0];
        assert_eq!(first.kind, InsightKind::BudgetUsage);
        assert_eq!(first.severity, Severity::Danger);
        assert_eq!(first.title, "Budget Exceeded");
        assert_eq!(first.value.as_deref(), Some("200 over budget"));

        let category = of_kind(&insights, InsightKind::CategoryBudget);
        assert_eq!(category.len(), 1);
        assert_eq!(category[0].title, "Food Over Budget");
        assert_eq!(category[0].value.as_deref(), Some("200 over"));
    }

    #[test]
    fn test_no_budget_means_no_usage_insight() {
        let insights = compute_insights(&[txn(500, "2024-06-01", "Food")], &[], &[], june());
        assert!(of_kind(&insights, InsightKind::BudgetUsage).is_empty());
        assert!(of_kind(&insights, InsightKind::CategoryBudget).is_empty());
    }

    #[test]
    fn test_budget_usage_levels() {
        let budgets = [budget("Food", 1000)];

        let warning = compute_insights(&[txn(850, "2024-06-05", "Food")], &[], &budgets, june());
        assert_eq!(warning[0].severity, Severity::Warning);
        assert_eq!(warning[0].title, "Approaching Budget Limit");
        assert_eq!(warning[0].value.as_deref(), Some("150 remaining"));

        let on_track = compute_insights(&[txn(300, "2024-06-05", "Food")], &[], &budgets, june());
        assert_eq!(on_track[0].severity, Severity::Success);
        assert_eq!(on_track[0].description, "You've used 30.0% of your total budget");
    }

    #[test]
    fn test_category_nearly_exhausted() {
        let insights = compute_insights(
            &[txn(950, "2024-06-05", "Food"), txn(10, "2024-06-05", "Bills")],
            &[],
            &[budget("Food", 1000), budget("Bills", 1000)],
            june(),
        );

        let category = of_kind(&insights, InsightKind::CategoryBudget);
        assert_eq!(category.len(), 1);
        assert_eq!(category[0].severity, Severity::Warning);
        assert_eq!(category[0].title, "Food Nearly Exhausted");
        assert_eq!(category[0].value.as_deref(), Some("50 left"));
    }

    #[test]
    fn test_month_over_month() {
        let previous = [txn(1000, "2024-05-10", "Food")];

        let up = compute_insights(&[txn(1200, "2024-06-10", "Food")], &previous, &[], june());
        let trend = of_kind(&up, InsightKind::MonthOverMonth);
        assert_eq!(trend[0].severity, Severity::Warning);
        assert_eq!(trend[0].description, "20.0% increase from last month");
        assert_eq!(trend[0].value.as_deref(), Some("200 difference"));

        let down = compute_insights(&[txn(500, "2024-06-10", "Food")], &previous, &[], june());
        assert_eq!(of_kind(&down, InsightKind::MonthOverMonth)[0].title, "Spending Decreased");

        let flat = compute_insights(&[txn(1040, "2024-06-10", "Food")], &previous, &[], june());
        assert!(of_kind(&flat, InsightKind::MonthOverMonth).is_empty());
    }

    #[test]
    fn test_top_category() {
        let insights = compute_insights(
            &[
                txn(300, "2024-06-01", "Food"),
                txn(300, "2024-06-02", "Bills"),
                txn(100, "2024-06-03", "Health"),
            ],
            &[],
            &[],
            june(),
        );

        let top = of_kind(&insights, InsightKind::TopCategory);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].description, "Bills accounts for 42.9% of your spending");
        assert_eq!(top[0].value.as_deref(), Some("300"));
    }

    #[test]
    fn test_frequent_spending() {
        let current: Vec<_> = (1..=25)
            .map(|day| txn(10, &format!("2024-06-{:02}", day), "Food"))
            .collect();
        let insights = compute_insights(&current, &[], &[], june());

        let frequency = of_kind(&insights, InsightKind::SpendingFrequency);
        assert_eq!(frequency.len(), 1);
        assert_eq!(frequency[0].description, "You made transactions on 25 out of 30 days");
        assert_eq!(frequency[0].value.as_deref(), Some("83.3% of days"));

        let sparse = compute_insights(&current[..24], &[], &[], june());
        assert!(of_kind(&sparse, InsightKind::SpendingFrequency).is_empty());
    }

    #[test]
    fn test_average_transaction_jump() {
        let previous = [txn(100, "2024-05-01", "Food"), txn(100, "2024-05-02", "Food")];

        let higher = compute_insights(
            &[txn(100, "2024-06-01", "Food"), txn(200, "2024-06-02", "Food")],
            &previous,
            &[],
            june(),
        );
        let average = of_kind(&higher, InsightKind::AverageTransaction);
        assert_eq!(average.len(), 1);
        assert_eq!(average[0].severity, Severity::Warning);
        assert_eq!(average[0].description, "Average transaction increased by 50.0%");
        assert_eq!(average[0].value.as_deref(), Some("150 avg"));

        let similar = compute_insights(&[txn(115, "2024-06-01", "Food")], &previous, &[], june());
        assert!(of_kind(&similar, InsightKind::AverageTransaction).is_empty());
    }

    #[test]
    fn test_rules_run_in_order() {
        let engine = InsightEngine::new();
        assert_eq!(
            engine.rule_kinds(),
            vec![
                InsightKind::BudgetUsage,
                InsightKind::MonthOverMonth,
                InsightKind::CategoryBudget,
                InsightKind::TopCategory,
                InsightKind::SpendingFrequency,
                InsightKind::AverageTransaction,
            ]
        );

        let insights = compute_insights(
            &[txn(1200, "2024-06-05", "Food")],
            &[txn(100, "2024-05-05", "Food")],
            &[budget("Food", 1000)],
            june(),
        );
        let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| engine.rule_kinds().iter().position(|r| r == k));
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn test_empty_month() {
        assert!(compute_insights(&[], &[], &[], june()).is_empty());
    }

    #[test]
    fn test_edge_of_the_calendar() {
        let last = Period::new(9999, 12).unwrap();
        assert!(compute_insights(&[], &[], &[], last).is_empty());

        let spending = [txn(10, "9999-12-31", "Food")];
        let insights = compute_insights(&spending, &[], &[], last);
        assert_eq!(of_kind(&insights, InsightKind::TopCategory).len(), 1);
    }

    #[test]
    fn test_oversized_budgets_and_spending_are_ignored() {
        let mut huge = budget("Food", 100);
        huge.amount = Money::from_cents(i64::MAX);
        let mut corrupt = txn(10, "2024-06-03", "Food");
        corrupt.amount = Money::from_cents(i64::MAX);
        let spending = [txn(50, "2024-06-02", "Food"), corrupt.clone(), corrupt];

        let insights = compute_insights(&spending, &[], &[huge], june());
        assert!(of_kind(&insights, InsightKind::BudgetUsage).is_empty());
        let top = of_kind(&insights, InsightKind::TopCategory);
        assert_eq!(top[0].value.as_deref(), Some("50"));
    }

    #[test]
    fn test_currency_symbol_and_json() {
        let insights = InsightEngine::with_symbol("₹").run(
            &[txn(1200, "2024-06-05", "Food")],
            &[],
            &[budget("Food", 1000)],
            june(),
        );
        assert_eq!(insights[0].value.as_deref(), Some("₹200 over budget"));

        let json = serde_json::to_value(&insights[0]).unwrap();
        assert_eq!(json["type"], "danger");
        assert_eq!(json["kind"], "budgetUsage");
    }

    #[test]
    fn test_report_from_storage() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open(FinvizPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage.budgets.upsert(budget("Food", 1000)).unwrap();
        storage.transactions.upsert(txn(1200, "2024-06-05", "Food")).unwrap();

        let report = InsightReport::generate(&storage, june(), &Settings::default()).unwrap();
        assert_eq!(report.insights[0].value.as_deref(), Some("₹200 over budget"));
        assert!(report.format_terminal().contains("DANGER"));
    }
}
