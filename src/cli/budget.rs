//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_list;
use crate::error::FinanceResult;
use crate::models::validation::parse_amount;
use crate::models::BudgetInput;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_period, parse_period_filter};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a category and month (replaces an existing one)
    Set {
        /// Category name
        category: String,
        /// Amount (e.g. "5000")
        amount: String,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List budgets, latest first
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Change the amount of a budget by ID
    Edit {
        /// Budget ID
        id: String,
        /// New amount
        amount: String,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            period,
        } => {
            let budget = service.set(BudgetInput {
                category,
                month: parse_period(period.as_deref())?,
                amount: parse_amount(&amount)?,
            })?;

            println!(
                "Budget for {} in {}: {}",
                budget.category,
                budget.month.long_label(),
                budget.amount.format_with_symbol(symbol)
            );
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::List { period } => {
            let budgets = service.list(parse_period_filter(period.as_deref())?)?;
            print!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Edit { id, amount } => {
            let budget = service.find(&id)?;
            let budget = service.update_amount(budget.id, parse_amount(&amount)?)?;
            println!(
                "Budget for {} in {} is now {}",
                budget.category,
                budget.month.long_label(),
                budget.amount.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Delete { id } => {
            let budget = service.find(&id)?;
            let budget = service.delete(budget.id)?;
            println!("Deleted budget for {} in {}", budget.category, budget.month);
        }
    }

    Ok(())
}
