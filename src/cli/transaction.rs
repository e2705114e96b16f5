//! Transaction CLI commands

use clap::Subcommand;
use chrono::Local;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::FinanceResult;
use crate::models::validation::{parse_amount, parse_date};
use crate::models::{TransactionInput, OTHER_CATEGORY};
use crate::services::{TransactionService, TransactionUpdate};
use crate::storage::Storage;

use super::parse_period_filter;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an expense
    Add {
        /// Amount (e.g. "250" or "1,200.50")
        amount: String,
        /// What it was for
        description: String,
        /// Category name
        #[arg(short, long, default_value = OTHER_CATEGORY)]
        category: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let txn = service.create(TransactionInput {
                amount: parse_amount(&amount)?,
                date,
                description,
                category,
            })?;

            println!("Added transaction {}", txn.id);
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List { period, limit } => {
            let period = parse_period_filter(period.as_deref())?;
            let mut transactions = service.list(period)?;
            let total = transactions.len();
            transactions.truncate(limit);

            print!("{}", format_transaction_list(&transactions, symbol));
            if total > transactions.len() {
                println!("... {} more (use --limit to show more)", total - transactions.len());
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            amount,
            date,
            description,
            category,
        } => {
            let txn = service.find(&id)?;
            let update = TransactionUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                description,
                category,
            };

            if update.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            let txn = service.update(txn.id, update)?;
            println!("Updated transaction {}", txn.id);
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.find(&id)?;
            let txn = service.delete(txn.id)?;
            println!("Deleted transaction {} ({})", txn.id, txn.description);
        }
    }

    Ok(())
}
