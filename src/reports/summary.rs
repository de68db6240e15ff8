//! One-paragraph spending summary shown at the top of the dashboard

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::category::{category_totals, CategoryAggregate};
use super::totals::total_spend;
use crate::display::format_short_date;
use crate::models::money::{serialize_dollars, Money};
use crate::models::MonthKey;
use crate::store::ExpenseStore;

const SUMMARY_EMOJIS: &[&str] = &["✨", "💫", "🔮", "📊", "💰", "💸", "📈", "🧠"];

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct SpendingSummary {
    /// Day the summary was generated for
    pub today: NaiveDate,
    /// Total across the whole store
    #[serde(serialize_with = "serialize_dollars")]
    pub total_spent: Money,
    /// Spending dated in the month containing `today`
    #[serde(serialize_with = "serialize_dollars")]
    pub this_month_total: Money,
    /// Up to two largest categories
    pub top_categories: Vec<CategoryAggregate>,
    /// Date of the newest record
    pub last_transaction: Option<NaiveDate>,
}

impl SpendingSummary {
    /// Summarize a store as seen on `today`
    pub fn generate(store: &ExpenseStore, today: NaiveDate) -> Self {
        let this_month = MonthKey::from_date(today);
        let this_month_total: Money = store
            .iter()
            .filter(|r| this_month.contains(r.date))
            .map(|r| r.amount)
            .sum();

        let mut top_categories = category_totals(store);
        top_categories.truncate(2);

        Self {
            today,
            total_spent: total_spend(store),
            this_month_total,
            top_categories,
            last_transaction: store.iter().map(|r| r.date).max(),
        }
    }

    /// Emoji prefix, fixed for a given day
    pub fn emoji(&self) -> &'static str {
        SUMMARY_EMOJIS[self.today.ordinal0() as usize % SUMMARY_EMOJIS.len()]
    }

    /// Human-readable summary sentence
    pub fn message(&self, symbol: &str) -> String {
        let Some(first) = self.top_categories.first() else {
            return format!(
                "{} Welcome to your financial dashboard! Start tracking your expenses to see personalized insights here.",
                self.emoji()
            );
        };

        let (second_name, second_pct) = self
            .top_categories
            .get(1)
            .map(|c| (c.category.as_str(), c.percentage))
            .unwrap_or(("other categories", 0));

        let mut message = format!(
            "{} You've spent {} with most going to {} ({}%) and {} ({}%).",
            self.emoji(),
            self.total_spent.format_short(symbol),
            first.category,
            first.percentage,
            second_name,
            second_pct
        );
        message.push_str(&format!(
            " This {} so far: {}.",
            self.today.format("%B"),
            self.this_month_total.format_short(symbol)
        ));
        if let Some(last) = self.last_transaction {
            message.push_str(&format!(
                " Your last transaction was on {}.",
                format_short_date(last)
            ));
        }
        message
    }
}
