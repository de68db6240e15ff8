//! Crypto portfolio view
//!
//! A fixed list of holdings with their market values. The figures are sample
//! data; nothing here talks to an exchange.

use serde::Serialize;
use tabled::Tabled;

use crate::display::render_table;
use crate::models::money::{serialize_dollars, Money};
use crate::models::Holding;

/// Holdings table row
#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "Asset")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "24h")]
    change: String,
}

/// A set of crypto holdings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    /// The sample portfolio shown on the crypto page
    pub fn seed() -> Self {
        let holdings = vec![
            Holding {
                name: "Bitcoin".into(),
                symbol: "BTC".into(),
                amount: 0.25,
                value: Money::from_units(12_500),
                change_pct: 2.4,
            },
            Holding {
                name: "Ethereum".into(),
                symbol: "ETH".into(),
                amount: 3.5,
                value: Money::from_units(7_350),
                change_pct: -1.2,
            },
            Holding {
                name: "Solana".into(),
                symbol: "SOL".into(),
                amount: 45.0,
                value: Money::from_units(4_275),
                change_pct: 5.7,
            },
        ];
        Self { holdings }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Add a position at the end of the list
    pub fn add(&mut self, holding: Holding) {
        self.holdings.push(holding);
    }

    /// Combined market value of every holding
    pub fn total_value(&self) -> Money {
        self.holdings.iter().map(|h| h.value).sum()
    }

    /// Format the holdings table for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.holdings.is_empty() {
            return "No holdings.\n".to_string();
        }

        let rows = self
            .holdings
            .iter()
            .map(|h| HoldingRow {
                name: h.name.clone(),
                symbol: h.symbol.clone(),
                amount: h.amount.to_string(),
                value: h.value.format_with_symbol(symbol),
                change: format!("{} {}", if h.is_up() { "▲" } else { "▼" }, h.change_display()),
            })
            .collect();

        let mut output = String::from("Crypto Holdings\n");
        output.push_str(&render_table(rows, 2));
        output.push('\n');
        output.push_str(&format!(
            "Total Value: {}\n",
            self.total_value().format_with_symbol(symbol)
        ));
        output
    }
}

/// Serialized portfolio with its total, for machine-readable output
#[derive(Debug, Serialize)]
pub struct PortfolioSnapshot<'a> {
    pub holdings: &'a [Holding],
    #[serde(serialize_with = "serialize_dollars")]
    pub total_value: Money,
}

impl<'a> From<&'a Portfolio> for PortfolioSnapshot<'a> {
    fn from(portfolio: &'a Portfolio) -> Self {
        Self {
            holdings: portfolio.holdings(),
            total_value: portfolio.total_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_total_value() {
        let portfolio = Portfolio::seed();
        assert_eq!(portfolio.holdings().len(), 3);
        assert_eq!(portfolio.total_value(), Money::from_units(24_125));
    }

    #[test]
    fn test_add_holding() {
        let mut portfolio = Portfolio::seed();
        portfolio.add(Holding::new("Cardano", "ada", 100.0, Money::from_units(45)).unwrap());
        assert_eq!(portfolio.holdings()[3].symbol, "ADA");
        assert_eq!(portfolio.total_value(), Money::from_units(24_170));
    }

    #[test]
    fn test_format_terminal() {
        let output = Portfolio::seed().format_terminal("$");
        assert!(output.contains("Bitcoin"));
        assert!(output.contains("▼ -1.2%"));
        assert!(output.contains("Total Value: $24125.00"));
    }

    #[test]
    fn test_empty_portfolio() {
        let portfolio = Portfolio::default();
        assert!(portfolio.total_value().is_zero());
        assert_eq!(portfolio.format_terminal("$"), "No holdings.\n");
    }

    #[test]
    fn test_snapshot_serializes_total() {
        let portfolio = Portfolio::seed();
        let json = serde_json::to_value(PortfolioSnapshot::from(&portfolio)).unwrap();
        assert_eq!(json["total_value"], 24125.0);
        assert_eq!(json["holdings"][0]["symbol"], "BTC");
    }
}
