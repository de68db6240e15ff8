//! Recent transactions listing

use serde::Serialize;
use tabled::Tabled;

use crate::display::{capitalize, category_icon, format_display_date, render_table, truncate};
use crate::models::{ExpenseRecord, MonthKey};
use crate::store::ExpenseStore;

const CATEGORY_WIDTH: usize = 20;

/// Records sorted newest first, optionally limited
///
/// Records sharing a date keep their store order.
pub fn recent_transactions(store: &ExpenseStore, limit: Option<usize>) -> Vec<&ExpenseRecord> {
    let mut records: Vec<&ExpenseRecord> = store.iter().collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        records.truncate(limit);
    }
    records
}

/// Filter applied to the transaction listing
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only records in this month
    pub month: Option<MonthKey>,
    /// Only records in this category (case-insensitive)
    pub category: Option<String>,
    /// Maximum rows
    pub limit: Option<usize>,
}

impl TransactionFilter {
    fn matches(&self, record: &ExpenseRecord) -> bool {
        if let Some(month) = &self.month {
            if !month.contains(record.date) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !record.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        true
    }
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Transaction list report
#[derive(Debug, Clone, Serialize)]
pub struct TransactionReport {
    /// Records newest first
    pub transactions: Vec<ExpenseRecord>,
}

impl TransactionReport {
    /// Generate the listing for a store
    pub fn generate(store: &ExpenseStore, filter: &TransactionFilter) -> Self {
        let mut transactions: Vec<ExpenseRecord> = recent_transactions(store, None)
            .into_iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }
        Self { transactions }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.transactions.is_empty() {
            return "No transactions found.\n".to_string();
        }

        let rows = self
            .transactions
            .iter()
            .map(|r| TransactionRow {
                icon: category_icon(&r.category),
                category: truncate(&capitalize(&r.category), CATEGORY_WIDTH),
                date: format_display_date(r.date),
                time: r.time_of_day.clone(),
                amount: r.display_amount(),
            })
            .collect();

        let mut output = String::from("Recent Transactions\n");
        output.push_str(&render_table(rows, 4));
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn record(date: &str, category: &str, units: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            Money::from_units(units),
            "09:00AM",
        )
    }

    #[test]
    fn test_newest_first() {
        let store = ExpenseStore::seed();
        let records = recent_transactions(&store, None);
        assert_eq!(records.len(), 25);
        assert!(records.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 3, 28).unwrap());
    }

    #[test]
    fn test_limit() {
        assert_eq!(recent_transactions(&ExpenseStore::seed(), Some(3)).len(), 3);
        assert!(recent_transactions(&ExpenseStore::empty(), Some(3)).is_empty());
    }

    #[test]
    fn test_same_day_keeps_store_order() {
        let store = ExpenseStore::from_records(vec![
            record("2025-01-01", "first", 1),
            record("2025-01-02", "later", 1),
            record("2025-01-01", "second", 1),
        ]);
        let order: Vec<_> = recent_transactions(&store, None)
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(order, ["later", "first", "second"]);
    }

    #[test]
    fn test_filter_by_month_and_category() {
        let filter = TransactionFilter {
            month: MonthKey::new(2025, 3),
            category: Some("Food".into()),
            limit: None,
        };
        let report = TransactionReport::generate(&ExpenseStore::seed(), &filter);
        assert_eq!(report.transactions.len(), 2);
        assert!(report.transactions.iter().all(|r| r.category == "food"));
    }

    #[test]
    fn test_format_terminal() {
        let report = TransactionReport::generate(
            &ExpenseStore::seed(),
            &TransactionFilter {
                limit: Some(1),
                ..Default::default()
            },
        );
        let output = report.format_terminal();
        assert!(output.contains("Mar 28, 2025"));
        assert!(output.contains("🛒"));
        assert!(output.contains("$110"));
    }
}
