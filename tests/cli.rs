//! End-to-end tests for the `finviz` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finviz(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finviz").unwrap();
    cmd.env("FINVIZ_DATA_DIR", data_dir.path());
    cmd.env_remove("FINVIZ_LOG");
    cmd
}

fn add_june_spending(data_dir: &TempDir) {
    finviz(data_dir)
        .args(["budget", "set", "Food", "1000", "-p", "2024-06"])
        .assert()
        .success();
    finviz(data_dir)
        .args(["transaction", "add", "1200", "Groceries", "-c", "Food", "-d", "2024-06-10"])
        .assert()
        .success();
}

#[test]
fn init_creates_default_categories() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized finviz"))
        .stdout(predicate::str::contains("Other"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("data").join("categories.json").exists());
}

#[test]
fn category_list_shows_defaults() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Other"));
}

#[test]
fn duplicate_category_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["category", "add", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn transaction_add_then_list() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["txn", "add", "250", "Lunch", "-c", "Food", "-d", "2024-06-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    finviz(&data_dir)
        .args(["transaction", "list", "-p", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));
}

#[test]
fn zero_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["transaction", "add", "0", "Nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));
}

#[test]
fn unknown_category_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["transaction", "add", "10", "Mystery", "-c", "Gadgets"])
        .assert()
        .failure();
}

#[test]
fn budget_set_then_list() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["budget", "set", "Food", "5000", "-p", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("June 2024"));

    finviz(&data_dir)
        .args(["budget", "list", "-p", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn compare_report_as_json() {
    let data_dir = TempDir::new().unwrap();
    add_june_spending(&data_dir);

    let output = finviz(&data_dir)
        .args(["report", "compare", "-p", "2024-06", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let row = &report["rows"][0];
    assert_eq!(row["category"], "Food");
    assert_eq!(row["budget"], 1000);
    assert_eq!(row["actual"], 1200);
    assert_eq!(row["difference"], 200);
    assert_eq!(row["percentage"], 120.0);
}

#[test]
fn insights_report_flags_overspending() {
    let data_dir = TempDir::new().unwrap();
    add_june_spending(&data_dir);

    finviz(&data_dir)
        .args(["report", "insights", "-p", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Exceeded"))
        .stdout(predicate::str::contains("Food Over Budget"));
}

#[test]
fn csv_is_refused_for_insights() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["report", "insights", "--format", "csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSV output is not available"));
}

#[test]
fn export_json_contains_everything() {
    let data_dir = TempDir::new().unwrap();
    add_june_spending(&data_dir);

    let output = finviz(&data_dir).args(["export", "json"]).output().unwrap();
    assert!(output.status.success());

    let export: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(export["transactions"].as_array().unwrap().len(), 1);
    assert_eq!(export["budgets"].as_array().unwrap().len(), 1);
    assert!(export["categories"].as_array().unwrap().len() >= 7);
}

#[test]
fn oversized_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["transaction", "add", "90000000000000000", "Everything", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must not exceed"));
}

#[test]
fn period_beyond_year_9999_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    finviz(&data_dir)
        .args(["report", "insights", "-p", "262142-12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}
