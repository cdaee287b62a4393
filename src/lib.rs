//! expense-cli - record, list, delete and summarize expenses from the terminal
//!
//! All data lives in one JSON file (`expenses.json` in the working directory
//! by default). Each invocation loads it once, runs a single command and, for
//! commands that change something, writes it back in full.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file path resolution
//! - `error`: Custom error types
//! - `models`: Expense, id and money types
//! - `storage`: The JSON-file-backed expense store
//! - `reports`: Totals and month filtering
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers
//! - `logging`: Diagnostic output setup
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use expense_cli::models::Money;
//! use expense_cli::storage::ExpenseStore;
//!
//! let mut store = ExpenseStore::load("expenses.json").store;
//! let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! store.add("Coffee", Money::parse("3.50").unwrap(), date).unwrap();
//! store.save().unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
