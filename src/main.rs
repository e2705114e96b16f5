use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use finance_visualizer::cli::{
    handle_budget_command, handle_category_command, handle_export_command, handle_report_command,
    handle_transaction_command, BudgetCommands, CategoryCommands, ExportCommands, ReportCommands,
    TransactionCommands,
};
use finance_visualizer::config::{FinvizPaths, Settings};
use finance_visualizer::storage::{bootstrap, Storage};

/// Environment variable holding a tracing filter, e.g. `finance_visualizer=debug`
const LOG_ENV: &str = "FINVIZ_LOG";

#[derive(Parser)]
#[command(
    name = "finviz",
    version,
    about = "Track spending, set monthly budgets and see where the money goes",
    long_about = "finviz records expenses by category, keeps a budget per category \
                  and month, and reports spending breakdowns, budget-vs-actual \
                  comparisons and plain-language insights."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, settings and default categories
    Init,

    /// Show or change configuration
    Config {
        /// Set the currency symbol used in reports
        #[arg(long)]
        currency: Option<String>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Spending reports and insights
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    debug!("finviz v{}", env!("CARGO_PKG_VERSION"));

    let paths = FinvizPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let storage = Storage::open(paths.clone())
        .with_context(|| format!("Failed to open data in {}", paths.data_dir().display()))?;
    bootstrap(&storage)?;

    match cli.command {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            info!(dir = %paths.base_dir().display(), "initialized");
            println!("Initialized finviz at: {}", paths.base_dir().display());
            println!();
            println!("Categories:");
            for category in storage.categories.get_all()? {
                println!("  - {}", category.name);
            }
            println!();
            println!("Run 'finviz transaction add <amount> <description> -c <category>' to record spending.");
        }
        Some(Commands::Config { currency }) => {
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
                settings.save(&paths)?;
                println!("Currency symbol set to \"{}\"", settings.currency_symbol);
                println!();
            }

            println!("finviz Configuration");
            println!("====================");
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Currency symbol:  {}", settings.currency_symbol);
            println!("Default color:    {}", settings.default_color);
            println!("Unbudgeted color: {}", settings.unbudgeted_color);
            println!(
                "Period range:     {} month(s) back, {} ahead",
                settings.months_before, settings.months_after
            );
        }
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        None => {
            println!("finviz - personal spending, budgets and insights");
            println!();
            println!("Run 'finviz --help' for usage information.");
            println!("Run 'finviz report summary' for an overview.");
        }
    }

    storage.close()?;
    Ok(())
}

/// Initialize logging from `FINVIZ_LOG`, or from the verbosity flags
fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to set up logging: {}", e);
    }
}
