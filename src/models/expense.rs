//! Expense record model
//!
//! One ledger line of the expense store. Records are plain values: nothing in
//! the crate mutates a record after it has been loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::{deserialize_dollars, serialize_dollars, Money};
use super::month::MonthKey;

fn default_currency() -> String {
    "$".to_string()
}

/// A single expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date of the expense (no time zone, no time component)
    pub date: NaiveDate,

    /// Free-form category label, compared case-sensitively when grouping
    pub category: String,

    /// Amount spent
    #[serde(
        deserialize_with = "deserialize_dollars",
        serialize_with = "serialize_dollars"
    )]
    pub amount: Money,

    /// Display-only time of day, e.g. "12:15PM"
    #[serde(default, alias = "timeStamp", alias = "time")]
    pub time_of_day: String,

    /// Currency symbol for this record
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl ExpenseRecord {
    /// Create a record in the default `$` currency
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        time_of_day: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            time_of_day: time_of_day.into(),
            currency: default_currency(),
        }
    }

    /// Set a different currency symbol
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Calendar month this record falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Amount rendered with this record's own currency symbol
    pub fn display_amount(&self) -> String {
        self.amount.format_short(&self.currency)
    }
}
