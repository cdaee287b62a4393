//! Expense CLI commands
//!
//! Implements the add, list, delete and summary commands. Raw argument text
//! is validated here; the store only ever sees typed values.

use chrono::NaiveDate;
use clap::Subcommand;
use tracing::info;

use crate::display::{format_expense_details, format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, Money};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(short, long)]
        description: String,
        /// Amount of the expense (e.g. 3.50, -12, $20)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// View all expenses
    List,
    /// Delete an expense by ID
    Delete {
        /// ID of the expense to delete
        id: String,
    },
    /// View total expenses, optionally for one month (1-12)
    Summary {
        /// Month number to filter by
        month: Option<String>,
    },
}

/// Handle an expense command
///
/// `today` is used as the date of new expenses when none is given.
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    cmd: ExpenseCommands,
    today: NaiveDate,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            date,
        } => {
            let description = parse_description(&description)?;
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => today,
            };

            let expense = store.add(description, amount, date)?;
            store.save()?;
            info!(id = %expense.id, "expense recorded");

            println!("Expense added:");
            print!("{}", format_expense_details(&expense));
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_table(store.list()));
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let removed = store.delete(id)?;
            store.save()?;
            info!(id = %removed.id, "expense removed");

            println!("Expense deleted:");
            print!("{}", format_expense_details(&removed));
        }

        ExpenseCommands::Summary { month } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            let summary = store.summary(month)?;
            print!("{}", format_summary(&summary));
        }
    }

    Ok(())
}

/// Trimmed, non-empty description
fn parse_description(raw: &str) -> ExpenseResult<String> {
    let description = raw.trim();
    if description.is_empty() {
        return Err(ExpenseError::invalid_argument("description cannot be empty"));
    }
    Ok(description.to_string())
}

fn parse_amount(raw: &str) -> ExpenseResult<Money> {
    Money::parse(raw).map_err(|e| ExpenseError::invalid_argument(e.to_string()))
}

fn parse_id(raw: &str) -> ExpenseResult<ExpenseId> {
    ExpenseId::parse(raw).map_err(|e| ExpenseError::invalid_argument(e.to_string()))
}

fn parse_date(raw: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::invalid_argument(format!("invalid date '{}', expected YYYY-MM-DD", raw))
    })
}

/// Month number as typed; the 1-12 range is checked by the summary itself
fn parse_month(raw: &str) -> ExpenseResult<u32> {
    raw.trim().parse().map_err(|_| {
        ExpenseError::invalid_argument(format!(
            "month must be a number between 1 and 12, got '{}'",
            raw
        ))
    })
}
