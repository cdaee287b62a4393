//! Display formatting for terminal output
//!
//! Turns expenses and summaries into the text the CLI prints.

pub mod expense;

pub use expense::{format_expense_details, format_expense_table, format_summary};
