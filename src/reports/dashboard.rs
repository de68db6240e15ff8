//! The expense dashboard: every expense view on one page

use chrono::NaiveDate;
use serde::Serialize;

use super::category::CategoryReport;
use super::monthly::MonthlyReport;
use super::summary::SpendingSummary;
use super::transactions::{TransactionFilter, TransactionReport};
use crate::display::format::{double_separator, separator};
use crate::models::money::{serialize_dollars, Money};
use crate::store::ExpenseStore;

const WIDTH: usize = 64;

/// All expense views computed from one store snapshot
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub summary: SpendingSummary,
    #[serde(serialize_with = "serialize_dollars")]
    pub total_spending: Money,
    pub categories: CategoryReport,
    pub monthly: MonthlyReport,
    pub transactions: TransactionReport,
}

impl DashboardReport {
    /// Build every view for `today`, listing at most `transaction_limit` rows
    pub fn generate(store: &ExpenseStore, today: NaiveDate, transaction_limit: Option<usize>) -> Self {
        let categories = CategoryReport::generate(store);
        Self {
            summary: SpendingSummary::generate(store, today),
            total_spending: categories.total,
            categories,
            monthly: MonthlyReport::generate(store),
            transactions: TransactionReport::generate(
                store,
                &TransactionFilter {
                    limit: transaction_limit,
                    ..Default::default()
                },
            ),
        }
    }

    /// Format the whole page for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&double_separator(WIDTH));
        output.push('\n');
        output.push_str(&self.summary.message(symbol));
        output.push('\n');
        output.push_str(&double_separator(WIDTH));
        output.push_str("\n\n");

        output.push_str(&format!(
            "Total Spending: {}\n\n",
            self.total_spending.format_short(symbol)
        ));

        output.push_str(&self.categories.format_terminal(symbol));
        output.push('\n');
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&self.monthly.format_terminal(symbol));
        output.push('\n');
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&self.transactions.format_terminal());

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_sections() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let report = DashboardReport::generate(&ExpenseStore::seed(), today, Some(5));

        assert_eq!(report.total_spending, Money::from_units(1264));
        assert_eq!(report.transactions.transactions.len(), 5);

        let output = report.format_terminal("$");
        assert!(output.contains("Total Spending: $1264"));
        assert!(output.contains("Spending by Category"));
        assert!(output.contains("Monthly Spending"));
        assert!(output.contains("Recent Transactions"));
    }

    #[test]
    fn test_dashboard_empty_store() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let report = DashboardReport::generate(&ExpenseStore::empty(), today, None);
        let output = report.format_terminal("$");
        assert!(output.contains("Welcome"));
        assert!(output.contains("Total Spending: $0"));
        assert!(output.contains("No transactions found."));
    }
}
