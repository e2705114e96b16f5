//! Report CLI commands

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_category_chart, format_monthly_chart};
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_category_totals_csv, export_monthly_totals_csv, write_json, write_yaml};
use crate::models::Period;
use crate::reports::{
    category_totals, filter_by_period, monthly_totals, BudgetComparisonReport, CategoryPalette,
    DashboardSummary, InsightReport,
};
use crate::storage::Storage;

use super::{parse_period, parse_period_filter, with_output};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Terminal text
    #[default]
    Text,
    Json,
    Yaml,
    /// Only for tabular reports
    Csv,
}

/// Options shared by every report
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Dashboard: total spent, top categories and recent transactions
    Summary {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Spending per month
    Monthly {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Spending per category
    Categories {
        /// Only this month (YYYY-MM); all time when omitted
        #[arg(short, long)]
        period: Option<String>,
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Budget vs. actual for a month
    Compare {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Spending insights for a month
    Insights {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Months offered for selection around the current one
    Periods,
}

fn csv_unsupported(report: &str) -> FinanceError {
    FinanceError::Export(format!(
        "CSV output is not available for the {} report; use text, json or yaml",
        report
    ))
}

/// Write a structured report as JSON or YAML, or its text rendering
fn write_structured<T: Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> FinanceResult<()> {
    match format {
        OutputFormat::Json => {
            write_json(value, &mut *out, true)?;
            out.write_all(b"\n")?;
            Ok(())
        }
        OutputFormat::Yaml => write_yaml(value, out),
        OutputFormat::Text | OutputFormat::Csv => {
            out.write_all(text().as_bytes())?;
            Ok(())
        }
    }
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { out } => {
            if out.format == OutputFormat::Csv {
                return Err(csv_unsupported("summary"));
            }
            let summary = DashboardSummary::generate(storage, settings)?;
            with_output(out.output.as_deref(), |w| {
                write_structured(w, out.format, &summary, || summary.format_terminal())
            })?;
        }

        ReportCommands::Monthly { out } => {
            let months = monthly_totals(&storage.transactions.get_all()?);
            with_output(out.output.as_deref(), |w| match out.format {
                OutputFormat::Csv => export_monthly_totals_csv(&months, w),
                format => write_structured(w, format, &months, || {
                    format_monthly_chart(&months, symbol)
                }),
            })?;
        }

        ReportCommands::Categories { period, out } => {
            let mut transactions = storage.transactions.get_all()?;
            if let Some(period) = parse_period_filter(period.as_deref())? {
                transactions = filter_by_period(&transactions, period);
            }
            let palette = CategoryPalette::from_categories(&storage.categories.get_all()?)
                .with_fallback(&settings.default_color);
            let totals = category_totals(&transactions, &palette);

            with_output(out.output.as_deref(), |w| match out.format {
                OutputFormat::Csv => export_category_totals_csv(&totals, w),
                format => write_structured(w, format, &totals, || {
                    format_category_chart(&totals, symbol)
                }),
            })?;
        }

        ReportCommands::Compare { period, out } => {
            let period = parse_period(period.as_deref())?;
            let report = BudgetComparisonReport::generate(storage, period, settings)?;

            with_output(out.output.as_deref(), |w| match out.format {
                OutputFormat::Csv => report.export_csv(w),
                format => write_structured(w, format, &report, || report.format_terminal()),
            })?;
        }

        ReportCommands::Insights { period, out } => {
            if out.format == OutputFormat::Csv {
                return Err(csv_unsupported("insights"));
            }
            let period = parse_period(period.as_deref())?;
            let report = InsightReport::generate(storage, period, settings)?;

            with_output(out.output.as_deref(), |w| {
                write_structured(w, out.format, &report, || report.format_terminal())
            })?;
        }

        ReportCommands::Periods => {
            let current = Period::current();
            for period in current.window(settings.months_before, settings.months_after) {
                let budgets = storage.budgets.list(Some(period))?.len();
                let marker = if period == current { "*" } else { " " };
                println!(
                    "{} {}  {:<16} {} budget(s)",
                    marker,
                    period,
                    period.long_label(),
                    budgets
                );
            }
        }
    }

    Ok(())
}
