//! Text charts for terminal output
//!
//! Horizontal bar renderings of the category breakdown and the monthly
//! totals.

use crate::reports::{CategoryTotal, MonthlyTotal};

const BAR_WIDTH: usize = 30;

/// Bar of `width` cells filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Shorten text to `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Spending by category as a bar chart, largest first
pub fn format_category_chart(totals: &[CategoryTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let max = totals.iter().map(|t| t.total.as_f64()).fold(0.0, f64::max);
    let mut output = String::new();
    output.push_str("Spending by Category\n");
    output.push_str(&separator(78));
    output.push('\n');

    for entry in totals {
        output.push_str(&format!(
            "{:<18} {} {:>12} {:>6.1}%  {}\n",
            truncate(&entry.category, 18),
            format_bar(entry.total.as_f64(), max, BAR_WIDTH),
            entry.total.format_with_symbol(symbol),
            entry.percentage,
            entry.color
        ));
    }

    output
}

/// Spending per month as a bar chart, oldest first
pub fn format_monthly_chart(months: &[MonthlyTotal], symbol: &str) -> String {
    if months.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let max = months.iter().map(|m| m.total.as_f64()).fold(0.0, f64::max);
    let mut output = String::new();
    output.push_str("Monthly Expenses\n");
    output.push_str(&separator(60));
    output.push('\n');

    for entry in months {
        output.push_str(&format!(
            "{:<9} {} {:>14}\n",
            entry.label,
            format_bar(entry.total.as_f64(), max, BAR_WIDTH),
            entry.total.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Period};

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(10.0, 10.0, 4), "████");
        assert_eq!(format_bar(1.0, 0.0, 3), "   ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Food", 10), "Food");
        assert_eq!(truncate("Entertainment", 8), "Enter...");
        assert_eq!(truncate("Entertainment", 2), "..");
    }

    #[test]
    fn test_monthly_chart() {
        let june = Period::new(2024, 6).unwrap();
        let months = vec![MonthlyTotal {
            month: june,
            total: Money::from_major(1200),
            label: june.label(),
        }];
        let chart = format_monthly_chart(&months, "₹");
        assert!(chart.contains("Jun 2024"));
        assert!(chart.contains("₹1,200"));
    }
}
