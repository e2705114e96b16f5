//! Export module for finance-visualizer
//!
//! - CSV: transactions, budgets and tabular reports (spreadsheet-compatible)
//! - JSON: machine-readable full export and report output
//! - YAML: human-readable full export and report output

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{
    export_budgets_csv, export_category_totals_csv, export_monthly_totals_csv,
    export_transactions_csv,
};
pub use json::{export_full_json, write_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, write_yaml};
