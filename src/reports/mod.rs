//! Reports module for expense-cli
//!
//! Aggregations computed over the stored expenses.

pub mod summary;

pub use summary::{month_from_number, ExpenseSummary};
