//! Configuration module for expense-cli
//!
//! Resolves where the expense data lives. There is no config file; the only
//! knob is the data file path passed on the command line.

pub mod paths;

pub use paths::{ExpensePaths, DEFAULT_DATA_FILE};
