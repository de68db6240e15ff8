//! CLI command for the crypto holdings view

use clap::Args;

use crate::config::Settings;
use crate::error::{FintrixError, FintrixResult};
use crate::models::{Holding, Money};
use crate::portfolio::{Portfolio, PortfolioSnapshot};

const MISSING_FIELDS: &str = "Please fill in all fields";
const INVALID_NUMBERS: &str = "Amount and value must be valid numbers";

/// Options for `fintrix portfolio`
#[derive(Args, Debug, Default, Clone)]
pub struct PortfolioArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Add a holding to the listing
    #[arg(
        long,
        num_args = 4,
        allow_hyphen_values = true,
        value_names = ["NAME", "SYMBOL", "AMOUNT", "VALUE"]
    )]
    pub add: Option<Vec<String>>,

    /// 24h change in percent for the added holding
    #[arg(long, requires = "add", allow_hyphen_values = true)]
    pub change: Option<f64>,
}

/// Build a holding from NAME SYMBOL AMOUNT VALUE
fn parse_holding(fields: &[String], symbol: &str, change: Option<f64>) -> FintrixResult<Holding> {
    let [name, ticker, amount, value] = fields else {
        return Err(FintrixError::Validation(MISSING_FIELDS.to_string()));
    };
    if [name, ticker, amount, value].iter().any(|f| f.trim().is_empty()) {
        return Err(FintrixError::Validation(MISSING_FIELDS.to_string()));
    }

    let invalid = || FintrixError::Validation(INVALID_NUMBERS.to_string());
    let amount: f64 = amount.trim().parse().map_err(|_| invalid())?;
    let value = Money::parse_with_symbol(value, symbol).map_err(|_| invalid())?;

    let holding = Holding::new(name.as_str(), ticker.as_str(), amount, value)?;
    Ok(match change {
        Some(pct) => holding.with_change(pct),
        None => holding,
    })
}

/// Print the crypto holdings, with an optional extra position
pub fn handle_portfolio_command(settings: &Settings, args: PortfolioArgs) -> FintrixResult<()> {
    let mut portfolio = Portfolio::seed();
    if let Some(fields) = &args.add {
        portfolio.add(parse_holding(fields, &settings.currency_symbol, args.change)?);
    }

    if args.json {
        let snapshot = PortfolioSnapshot::from(&portfolio);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", portfolio.format_terminal(&settings.currency_symbol));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: [&str; 4]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_holding() {
        let holding =
            parse_holding(&fields(["Cardano", "ada", "100", "$45.50"]), "$", Some(-3.1)).unwrap();
        assert_eq!(holding.symbol, "ADA");
        assert_eq!(holding.amount, 100.0);
        assert_eq!(holding.value, Money::from_cents(4550));
        assert_eq!(holding.change_display(), "-3.1%");
    }

    #[test]
    fn test_parse_holding_blank_field() {
        let err = parse_holding(&fields(["Cardano", " ", "100", "45"]), "$", None).unwrap_err();
        assert_eq!(err.to_string(), format!("Validation error: {}", MISSING_FIELDS));
    }

    #[test]
    fn test_parse_holding_bad_numbers() {
        for bad in [["Cardano", "ADA", "lots", "45"], ["Cardano", "ADA", "100", "cheap"]] {
            let err = parse_holding(&fields(bad), "$", None).unwrap_err();
            assert_eq!(err.to_string(), format!("Validation error: {}", INVALID_NUMBERS));
        }
    }

    #[test]
    fn test_parse_holding_negative_amount() {
        let err = parse_holding(&fields(["Cardano", "ADA", "-1", "45"]), "$", None).unwrap_err();
        assert!(err.is_validation());
    }
}
