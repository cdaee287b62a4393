//! Expense model
//!
//! One recorded spending entry. The four named fields are the persisted
//! schema; anything else found on a record in the data file is carried along
//! in `extra` so a save never drops it.
//!
//! Reading goes through a JSON map rather than `#[serde(flatten)]`: flatten
//! buffers numbers, and buffered numbers lose their exact-digit form.

use chrono::{Datelike, Month, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::ExpenseId;
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// Calendar date of the expense (`YYYY-MM-DD` on disk)
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// Amount as entered, any sign
    pub amount: Money,

    /// Unknown fields preserved through load and save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
            extra: Map::new(),
        }
    }

    /// Month component of the stored calendar date (1-12)
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Whether this expense falls in the given month of any year
    pub fn is_in_month(&self, month: Month) -> bool {
        self.month() == month.number_from_month()
    }
}

impl TryFrom<Map<String, Value>> for Expense {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: take_field(&mut fields, "id")?,
            date: take_field(&mut fields, "date")?,
            description: take_field(&mut fields, "description")?,
            amount: take_field(&mut fields, "amount")?,
            extra: fields,
        })
    }
}

fn take_field<T: DeserializeOwned>(fields: &mut Map<String, Value>, name: &str) -> Result<T, String> {
    let value = fields
        .remove(name)
        .ok_or_else(|| format!("missing field `{}`", name))?;
    serde_json::from_value(value).map_err(|e| format!("invalid `{}`: {}", name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn coffee() -> Expense {
        Expense::new(
            ExpenseId::new(1),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            "Coffee",
            Money::from_decimal(dec!(3.5)),
        )
    }

    #[test]
    fn test_month_filter_uses_calendar_date() {
        let mut expense = coffee();
        assert!(expense.is_in_month(Month::May));
        assert!(!expense.is_in_month(Month::April));

        expense.date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(expense.month(), 12);
        assert!(expense.is_in_month(Month::December));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "date": "2024-05-01",
                "description": "Coffee",
                "amount": 3.5
            })
        );
    }

    #[test]
    fn test_unknown_fields_survive() {
        let raw = r#"{"id":4,"date":"2024-03-09","description":"Taxi","amount":12,"category":"travel"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();

        assert_eq!(expense.id, ExpenseId::new(4));
        assert_eq!(expense.amount.amount(), dec!(12));
        assert_eq!(expense.extra.get("category"), Some(&Value::from("travel")));

        let back = serde_json::to_value(&expense).unwrap();
        assert_eq!(back["category"], "travel");
    }

    #[test]
    fn test_numbers_keep_their_digits() {
        let raw = r#"{"id":18446744073709551615,"date":"2024-03-09","description":"x","amount":0.1234567890123456789,"rate":0.30000000000000000004}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();

        assert_eq!(expense.id.value(), u64::MAX);
        assert_eq!(expense.amount.amount(), dec!(0.1234567890123456789));

        let back = serde_json::to_string(&expense).unwrap();
        assert!(back.contains(r#""amount":0.1234567890123456789"#));
        assert!(back.contains(r#""rate":0.30000000000000000004"#));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let raw = r#"{"id":4,"date":"2024-03-09","amount":12}"#;
        let err = serde_json::from_str::<Expense>(raw).unwrap_err();
        assert!(err.to_string().contains("missing field `description`"));
    }

    #[test]
    fn test_out_of_range_amount_is_rejected() {
        let raw = r#"{"id":4,"date":"2024-03-09","description":"x","amount":1e30}"#;
        let err = serde_json::from_str::<Expense>(raw).unwrap_err();
        assert!(err.to_string().contains("invalid `amount`"));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let raw = r#"{"id":4,"date":"2024-13-09","description":"x","amount":1}"#;
        assert!(serde_json::from_str::<Expense>(raw).is_err());
    }
}
