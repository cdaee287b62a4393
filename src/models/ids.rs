//! Strongly-typed expense identifier
//!
//! Ids are positive integers handed out in increasing order by the store.
//! The newtype keeps them from being confused with counts or months.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id given to the first expense of an empty store
    pub const FIRST: Self = Self(1);

    /// Wrap a raw id value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Ids must be positive
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }

    /// The id that follows this one, `None` once the id space is used up
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Parse an id from user input
    ///
    /// Accepts a bare positive integer, optionally prefixed with `#`.
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let value: u64 = digits
            .parse()
            .map_err(|_| IdParseError::InvalidFormat(s.to_string()))?;

        let id = Self(value);
        if !id.is_valid() {
            return Err(IdParseError::NotPositive);
        }
        Ok(id)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for id parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    InvalidFormat(String),
    NotPositive,
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdParseError::InvalidFormat(s) => write!(f, "Invalid expense id: {}", s),
            IdParseError::NotPositive => write!(f, "Expense ids start at 1"),
        }
    }
}

impl std::error::Error for IdParseError {}
