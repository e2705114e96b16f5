//! CSV export
//!
//! Transactions and budgets from the store, plus the tabular reports.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::reports::{CategoryTotal, MonthlyTotal};
use crate::storage::Storage;

fn export_err(e: csv::Error) -> FinanceError {
    FinanceError::Export(e.to_string())
}

fn finish<W: Write>(mut writer: csv::Writer<W>) -> FinanceResult<()> {
    writer.flush().map_err(|e| FinanceError::Export(e.to_string()))
}

/// Export all transactions, newest first
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for txn in storage.transactions.get_all()? {
        csv.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.to_string(),
            txn.description,
            txn.category,
            format!("{:.2}", txn.amount.as_f64()),
        ])
        .map_err(export_err)?;
    }

    finish(csv)
}

/// Export all budgets, by month then category
pub fn export_budgets_csv<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let mut budgets = storage.budgets.list(None)?;
    budgets.sort_by(|a, b| a.month.cmp(&b.month).then_with(|| a.category.cmp(&b.category)));

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Month", "Category", "Amount"])
        .map_err(export_err)?;

    for budget in budgets {
        csv.write_record([
            budget.id.as_uuid().to_string(),
            budget.month.to_string(),
            budget.category,
            format!("{:.2}", budget.amount.as_f64()),
        ])
        .map_err(export_err)?;
    }

    finish(csv)
}

/// Export the category breakdown
pub fn export_category_totals_csv<W: Write>(totals: &[CategoryTotal], writer: W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Category", "Total", "Percentage", "Color"])
        .map_err(export_err)?;

    for entry in totals {
        csv.write_record([
            entry.category.clone(),
            format!("{:.2}", entry.total.as_f64()),
            format!("{:.2}", entry.percentage),
            entry.color.clone(),
        ])
        .map_err(export_err)?;
    }

    finish(csv)
}

/// Export the monthly totals
pub fn export_monthly_totals_csv<W: Write>(months: &[MonthlyTotal], writer: W) -> FinanceResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Month", "Label", "Total"]).map_err(export_err)?;

    for entry in months {
        csv.write_record([
            entry.month.to_string(),
            entry.label.clone(),
            format!("{:.2}", entry.total.as_f64()),
        ])
        .map_err(export_err)?;
    }

    finish(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinvizPaths;
    use crate::models::{Budget, BudgetInput, Money, Period, Transaction, TransactionInput};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open(FinvizPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_transactions_csv_quotes_fields() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .transactions
            .upsert(Transaction::new(TransactionInput {
                amount: Money::from_cents(1250),
                date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
                description: "Coffee, with cake".into(),
                category: "Food".into(),
            }))
            .unwrap();

        let mut buf = Vec::new();
        export_transactions_csv(&storage, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("ID,Date,Description,Category,Amount"));
        assert!(csv.contains("2024-06-05,\"Coffee, with cake\",Food,12.50"));
    }

    #[test]
    fn test_budgets_csv() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .budgets
            .upsert(Budget::new(BudgetInput {
                category: "Food".into(),
                month: Period::new(2024, 6).unwrap(),
                amount: Money::from_major(1000),
            }))
            .unwrap();

        let mut buf = Vec::new();
        export_budgets_csv(&storage, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.contains(",2024-06,Food,1000.00"));
    }

    #[test]
    fn test_monthly_totals_csv() {
        let june = Period::new(2024, 6).unwrap();
        let months = [MonthlyTotal {
            month: june,
            total: Money::from_major(300),
            label: june.label(),
        }];

        let mut buf = Vec::new();
        export_monthly_totals_csv(&months, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines, vec!["Month,Label,Total", "2024-06,Jun 2024,300.00"]);
    }
}
