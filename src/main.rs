use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::warn;

use expense_cli::cli::{handle_expense_command, ExpenseCommands};
use expense_cli::config::ExpensePaths;
use expense_cli::logging::init_logging;
use expense_cli::storage::{ExpenseStore, LoadOutcome};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Manage finances: add, delete and view expenses",
    long_about = "A small command-line expense tracker. Expenses are kept in a \
                  JSON file in the current directory (expenses.json unless \
                  --file says otherwise)."
)]
struct Cli {
    /// Path of the expense data file
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: ExpenseCommands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("Warning: {:#}", err);
    }

    let paths = ExpensePaths::new(cli.file);
    let LoadOutcome { mut store, warning } = ExpenseStore::load(paths.data_file());
    if let Some(warning) = warning {
        warn!("{}", warning);
    }

    let today = Utc::now().date_naive();

    match handle_expense_command(&mut store, cli.command, today) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_environmental() => {
            eprintln!(
                "Error: could not save expenses to {}: {}",
                store.path().display(),
                err
            );
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
