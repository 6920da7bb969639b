use anyhow::Result;
use clap::{Parser, Subcommand};

use xpense::cli::{
    handle_add_command, handle_list_command, handle_report_command, handle_set_budget_command,
    handle_summary_command, SummaryPeriod,
};
use xpense::config::paths::XpensePaths;
use xpense::storage::Storage;
use xpense::XpenseError;

#[derive(Parser)]
#[command(
    name = "xpense",
    version,
    about = "Tiny CLI expense tracker",
    long_about = "xpense records dated expenses with a category and optional note, \
                  stores them in a local CSV file, and answers questions about \
                  spending over time, optionally against per-category monthly budgets."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add {
        /// Amount, e.g., 12.50
        amount: String,
        /// Category, e.g., food
        category: String,
        /// YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List expenses (filters optional)
    List {
        /// "this" or YYYY-MM (e.g., 2025-11)
        #[arg(short, long)]
        month: Option<String>,
        /// YYYY-MM-DD
        #[arg(short, long)]
        start: Option<String>,
        /// YYYY-MM-DD
        #[arg(short, long)]
        end: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Show row numbers
        #[arg(long)]
        with_id: bool,
    },

    /// Totals by category
    Summary {
        /// Pick a period
        #[arg(value_enum)]
        period: SummaryPeriod,
        /// YYYY-MM-DD (for 'range')
        #[arg(short, long)]
        start: Option<String>,
        /// YYYY-MM-DD (for 'range')
        #[arg(short, long)]
        end: Option<String>,
        /// Optional: filter to a single category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Set or view per-category monthly budgets
    SetBudget {
        /// Category name (omit to view)
        category: Option<String>,
        /// Budget amount (omit to view)
        amount: Option<String>,
    },

    /// Month-to-date report vs budgets
    Report,
}

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<XpenseError>() {
            Some(e) if e.is_usage() => eprintln!("{}", e),
            _ => eprintln!("Error: {:#}", err),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = XpensePaths::new()?;
    let storage = Storage::new(paths)?;

    match cli.command {
        Commands::Add {
            amount,
            category,
            date,
            note,
        } => {
            handle_add_command(
                &storage,
                &amount,
                &category,
                date.as_deref(),
                note.as_deref(),
            )?;
        }
        Commands::List {
            month,
            start,
            end,
            category,
            with_id,
        } => {
            handle_list_command(
                &storage,
                month.as_deref(),
                start.as_deref(),
                end.as_deref(),
                category.as_deref(),
                with_id,
            )?;
        }
        Commands::Summary {
            period,
            start,
            end,
            category,
        } => {
            handle_summary_command(
                &storage,
                period,
                start.as_deref(),
                end.as_deref(),
                category.as_deref(),
            )?;
        }
        Commands::SetBudget { category, amount } => {
            handle_set_budget_command(&storage, category.as_deref(), amount.as_deref())?;
        }
        Commands::Report => {
            handle_report_command(&storage)?;
        }
    }

    Ok(())
}
