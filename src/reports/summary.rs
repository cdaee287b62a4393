//! Expense Summary
//!
//! Totals expenses, optionally restricted to one calendar month.

use chrono::Month;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Result of summing a set of expenses
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Month filter that was applied, if any
    pub month: Option<Month>,
    /// Exact sum of the matching amounts
    pub total: Money,
    /// Number of expenses that matched
    pub count: usize,
}

impl ExpenseSummary {
    /// Sum `expenses`, keeping only those dated in `month` when given
    ///
    /// `month` is a 1-12 month number; anything else is an invalid argument.
    pub fn generate(expenses: &[Expense], month: Option<u32>) -> ExpenseResult<Self> {
        let month = month.map(month_from_number).transpose()?;

        let (total, count) = expenses
            .iter()
            .filter(|e| month.map_or(true, |m| e.is_in_month(m)))
            .try_fold((Money::zero(), 0), |(total, count), e| {
                total
                    .checked_add(e.amount)
                    .map(|total| (total, count + 1))
                    .ok_or_else(|| {
                        ExpenseError::Overflow(format!(
                            "total exceeds the largest storable amount at expense {}",
                            e.id
                        ))
                    })
            })?;

        Ok(Self {
            month,
            total,
            count,
        })
    }

    /// True when no expense matched; distinct from a total that sums to zero
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Convert a 1-12 month number into a [`Month`]
pub fn month_from_number(month: u32) -> ExpenseResult<Month> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| {
            ExpenseError::invalid_argument(format!(
                "month must be a number between 1 and 12, got {}",
                month
            ))
        })
}
