//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and report layers.

pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, OutputFormat, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{FinanceError, FinanceResult};
use crate::models::validation::ValidationError;
use crate::models::Period;

/// Parse a `--period` argument, defaulting to the current month
pub(crate) fn parse_period(value: Option<&str>) -> FinanceResult<Period> {
    match value {
        Some(s) => Period::parse(s).map_err(|_| ValidationError::InvalidPeriod(s.to_string()).into()),
        None => Ok(Period::current()),
    }
}

/// Parse an optional `--period` filter
pub(crate) fn parse_period_filter(value: Option<&str>) -> FinanceResult<Option<Period>> {
    value.map(|s| parse_period(Some(s))).transpose()
}

/// Run `write` against the output file, or stdout when none is given
pub(crate) fn with_output<F>(output: Option<&Path>, write: F) -> FinanceResult<()>
where
    F: FnOnce(&mut dyn Write) -> FinanceResult<()>,
{
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanceError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "wrote output file");
            eprintln!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
            lock.flush()?;
            Ok(())
        }
    }
}
