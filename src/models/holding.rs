//! Crypto holding model

use serde::Serialize;

use super::money::{serialize_dollars, Money};
use crate::error::{FintrixError, FintrixResult};

/// A single crypto asset position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    /// Asset name, e.g. "Bitcoin"
    pub name: String,

    /// Ticker symbol, always upper-case
    pub symbol: String,

    /// Units held
    pub amount: f64,

    /// Market value of the position
    #[serde(serialize_with = "serialize_dollars")]
    pub value: Money,

    /// 24h change in percent
    pub change_pct: f64,
}

impl Holding {
    /// Create a validated holding
    ///
    /// Name and symbol must be non-empty, the amount must be a finite,
    /// non-negative number and the value must not be negative. New positions
    /// start with a 0% change.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        amount: f64,
        value: Money,
    ) -> FintrixResult<Self> {
        let name = name.into().trim().to_string();
        let symbol = symbol.into().trim().to_uppercase();

        if name.is_empty() || symbol.is_empty() {
            return Err(FintrixError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }
        if !amount.is_finite() || amount < 0.0 || value.is_negative() {
            return Err(FintrixError::Validation(
                "Amount and value must be valid numbers".to_string(),
            ));
        }

        Ok(Self {
            name,
            symbol,
            amount,
            value,
            change_pct: 0.0,
        })
    }

    /// Set the 24h change
    pub fn with_change(mut self, change_pct: f64) -> Self {
        self.change_pct = change_pct;
        self
    }

    /// Whether the 24h change is non-negative
    pub fn is_up(&self) -> bool {
        self.change_pct >= 0.0
    }

    /// Change rendered with an explicit sign, e.g. "+2.4%"
    pub fn change_display(&self) -> String {
        format!("{:+.1}%", self.change_pct)
    }
}
