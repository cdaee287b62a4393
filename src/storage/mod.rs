//! Storage layer for expense-cli
//!
//! Provides the JSON-file-backed expense store with atomic writes.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadOutcome, LoadWarning, SkippedRecord};
pub use file_io::{read_json_if_exists, write_json_atomic};
