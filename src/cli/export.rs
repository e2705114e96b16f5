//! Export CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::FinanceResult;
use crate::export::{export_budgets_csv, export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

use super::with_output;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Full export (categories, transactions, budgets) as JSON
    Json {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Full export as YAML
    Yaml {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Transactions as CSV
    Transactions {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Budgets as CSV
    Budgets {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FinanceResult<()> {
    match cmd {
        ExportCommands::Json { output, compact } => {
            with_output(output.as_deref(), |w| export_full_json(storage, w, !compact))
        }
        ExportCommands::Yaml { output } => {
            with_output(output.as_deref(), |w| export_full_yaml(storage, w))
        }
        ExportCommands::Transactions { output } => {
            with_output(output.as_deref(), |w| export_transactions_csv(storage, w))
        }
        ExportCommands::Budgets { output } => {
            with_output(output.as_deref(), |w| export_budgets_csv(storage, w))
        }
    }
}
