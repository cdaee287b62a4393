//! Expense display formatting
//!
//! Amounts are rounded to cents here and only here.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::reports::ExpenseSummary;

/// One row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
        }
    }
}

/// Format all expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut table = Table::new(expenses.iter().map(ExpenseRow::from));
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());

    let noun = if expenses.len() == 1 { "expense" } else { "expenses" };
    format!("{}\n{} {}\n", table, expenses.len(), noun)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID:          {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Amount:      {}\n", expense.amount));

    output
}

/// Format the result of a summary, including the "nothing matched" case
pub fn format_summary(summary: &ExpenseSummary) -> String {
    match (summary.month, summary.is_empty()) {
        (Some(month), true) => format!("No expenses recorded for {}.\n", month.name()),
        (None, true) => "No expenses recorded.\n".to_string(),
        (Some(month), false) => format!(
            "Total expenses for {}: {} ({} recorded)\n",
            month.name(),
            summary.total,
            summary.count
        ),
        (None, false) => format!(
            "Total expenses: {} ({} recorded)\n",
            summary.total, summary.count
        ),
    }
}
