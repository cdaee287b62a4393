//! Core data models for expense-cli
//!
//! An expense is an id, a calendar date, a description and an amount.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::Expense;
pub use ids::{ExpenseId, IdParseError};
pub use money::{Money, MoneyParseError};
