//! Money type for expense amounts
//!
//! Amounts are stored as integer cents so that grouping records by month or
//! category and summing them gives exactly the same grand total regardless of
//! the order the records are added in.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// Addition saturates at the `i64` bounds instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fintrix::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a decimal dollar value, rounding to the
    /// nearest cent. Returns `None` for NaN or infinite input.
    pub fn from_dollars_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Amount as a decimal value, for export formats
    pub fn to_dollars_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "10", and a leading `symbol` ("$10.50").
    pub fn parse_with_symbol(s: &str, symbol: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = if symbol.is_empty() {
            rest
        } else {
            rest.strip_prefix(symbol).unwrap_or(rest)
        };

        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());
        if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let cents = match rest.split_once('.') {
            Some((whole, frac)) => {
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                if frac.is_empty() || frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let frac_value: i64 = frac.parse().map_err(|_| invalid())?;
                let frac_cents = if frac.len() == 1 { frac_value * 10 } else { frac_value };
                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(frac_cents))
                    .ok_or_else(invalid)?
            }
            None => rest
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, always two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Format with a currency symbol, dropping ".00" for whole amounts
    pub fn format_short(&self, symbol: &str) -> String {
        if self.cents_part() == 0 {
            let sign = if self.is_negative() { "-" } else { "" };
            format!("{}{}{}", sign, symbol, self.dollars().abs())
        } else {
            self.format_with_symbol(symbol)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Deserialize a decimal dollar amount (`15`, `12.5`) into cents.
///
/// Used for data files, where amounts are written the way people read them.
pub fn deserialize_dollars<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Money::from_dollars_f64(value)
        .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
}

/// Serialize cents back out as a decimal dollar amount
pub fn serialize_dollars<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(money.to_dollars_f64())
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_dollars_f64() {
        assert_eq!(Money::from_dollars_f64(15.0), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_dollars_f64(12.345), Some(Money::from_cents(1235)));
        assert_eq!(Money::from_dollars_f64(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_dollars_f64(f64::NAN), None);
        assert_eq!(Money::from_dollars_f64(f64::INFINITY), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_format_short() {
        assert_eq!(Money::from_units(65).format_short("$"), "$65");
        assert_eq!(Money::from_cents(1250).format_short("€"), "€12.50");
        assert_eq!(Money::from_units(-3).format_short("$"), "-$3");
    }

    #[test]
    fn test_parse() {
        let parse = |s: &str| Money::parse_with_symbol(s, "$");
        assert_eq!(parse("10.50").unwrap().cents(), 1050);
        assert_eq!(parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(parse("10").unwrap().cents(), 1000);
        assert_eq!(parse("10.5").unwrap().cents(), 1050);
        assert_eq!(parse(".05").unwrap().cents(), 5);
        assert_eq!(Money::parse_with_symbol("€7", "€").unwrap().cents(), 700);
        assert!(parse("10.505").is_err());
        assert!(parse("ten").is_err());
        assert!(parse("99999999999999999").is_err());
        assert!(parse("--5").is_err());
        assert!(parse("+5").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_sum_saturates() {
        let huge = Money::from_cents(i64::MAX - 10);
        let total: Money = [huge, huge, Money::from_cents(5)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut running = huge;
        running += Money::from_units(1);
        assert_eq!(running.cents(), i64::MAX);
    }

    #[test]
    fn test_dollar_serde_helpers() {
        #[derive(Serialize, Deserialize)]
        struct Row {
            #[serde(
                deserialize_with = "deserialize_dollars",
                serialize_with = "serialize_dollars"
            )]
            amount: Money,
        }

        let row: Row = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(row.amount.cents(), 1250);
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"amount":12.5}"#);
    }
}
