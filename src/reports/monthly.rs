//! Spending by calendar month

use std::collections::BTreeMap;

use serde::Serialize;

use crate::display::format::format_bar;
use crate::models::money::{serialize_dollars, Money};
use crate::models::MonthKey;
use crate::store::ExpenseStore;

/// Width of the bar column in the terminal chart
const BAR_WIDTH: usize = 40;

/// Total spending in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyAggregate {
    /// The month, used for ordering
    #[serde(skip)]
    pub month: MonthKey,
    /// Display label, e.g. "Jan 2025"
    pub label: String,
    /// Sum of amounts dated in this month
    #[serde(serialize_with = "serialize_dollars")]
    pub total: Money,
}

/// Per-month totals in chronological order
///
/// Months are keyed by (year, month) of the calendar date, never by label, so
/// "Dec 2024" always precedes "Jan 2025".
pub fn monthly_totals(store: &ExpenseStore) -> Vec<MonthlyAggregate> {
    let mut months: BTreeMap<MonthKey, Money> = BTreeMap::new();
    for record in store {
        *months.entry(record.month()).or_insert_with(Money::zero) += record.amount;
    }

    months
        .into_iter()
        .map(|(month, total)| MonthlyAggregate {
            month,
            label: month.label(),
            total,
        })
        .collect()
}

/// Upper bound for a monthly chart: the largest month rounded up to the next
/// hundred, and never below one hundred.
pub fn chart_ceiling(months: &[MonthlyAggregate]) -> Money {
    const STEP: i64 = 100 * 100;

    let max = months.iter().map(|m| m.total.cents()).max().unwrap_or(0);
    if max <= 0 {
        return Money::from_cents(STEP);
    }
    Money::from_cents(((max + STEP - 1) / STEP) * STEP)
}

/// Monthly spending report
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    /// Months in chronological order
    pub months: Vec<MonthlyAggregate>,
    /// Chart scale ceiling
    #[serde(serialize_with = "serialize_dollars")]
    pub ceiling: Money,
}

impl MonthlyReport {
    /// Generate the report for a store
    pub fn generate(store: &ExpenseStore) -> Self {
        let months = monthly_totals(store);
        let ceiling = chart_ceiling(&months);
        Self { months, ceiling }
    }

    /// The most recent month with spending
    pub fn latest(&self) -> Option<&MonthlyAggregate> {
        self.months.last()
    }

    /// Format the report as a horizontal bar chart
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.months.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let max = self.ceiling.to_dollars_f64();
        let latest = self.latest().map(|m| m.month);

        let mut output = format!(
            "Monthly Spending (scale: 0 - {})\n",
            self.ceiling.format_short(symbol)
        );
        for month in &self.months {
            let marker = if Some(month.month) == latest { "◀" } else { "" };
            output.push_str(&format!(
                "{:<9} {} {:>10} {}\n",
                month.label,
                format_bar(month.total.to_dollars_f64(), max, BAR_WIDTH),
                month.total.format_with_symbol(symbol),
                marker
            ));
        }
        output
    }
}
