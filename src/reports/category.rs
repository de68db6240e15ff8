//! Spending by category
//!
//! Groups records by their exact category string, sums each group and works
//! out its share of the grand total.

use std::collections::HashMap;

use serde::Serialize;
use tabled::Tabled;

use super::totals::{percentage_of, total_spend};
use crate::display::{capitalize, category_icon, render_table};
use crate::models::money::{serialize_dollars, Money};
use crate::store::ExpenseStore;

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    /// Category label as it appears in the records
    pub category: String,
    /// Sum of amounts in this category
    #[serde(serialize_with = "serialize_dollars")]
    pub total: Money,
    /// Number of records in this category
    pub count: usize,
    /// Share of the grand total, rounded to a whole percent
    pub percentage: i64,
}

/// Per-category totals, largest first
///
/// Categories with equal totals keep the order in which they first appear in
/// the store, so the result is the same on every call.
pub fn category_totals(store: &ExpenseStore) -> Vec<CategoryAggregate> {
    let mut groups: Vec<CategoryAggregate> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in store {
        match index.get(record.category.as_str()) {
            Some(&i) => {
                groups[i].total += record.amount;
                groups[i].count += 1;
            }
            None => {
                index.insert(record.category.as_str(), groups.len());
                groups.push(CategoryAggregate {
                    category: record.category.clone(),
                    total: record.amount,
                    count: 1,
                    percentage: 0,
                });
            }
        }
    }

    let grand_total = total_spend(store);
    for group in &mut groups {
        group.percentage = percentage_of(group.total, grand_total);
    }

    // sort_by is stable: ties stay in encounter order
    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "%")]
    percentage: String,
}

/// Category breakdown report
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    /// Categories sorted by total, largest first
    pub categories: Vec<CategoryAggregate>,
    /// Grand total across all categories
    #[serde(serialize_with = "serialize_dollars")]
    pub total: Money,
}

impl CategoryReport {
    /// Generate the breakdown for a store
    pub fn generate(store: &ExpenseStore) -> Self {
        Self {
            categories: category_totals(store),
            total: total_spend(store),
        }
    }

    /// The `limit` largest categories
    pub fn top(&self, limit: usize) -> &[CategoryAggregate] {
        &self.categories[..limit.min(self.categories.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.categories.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let rows = self
            .categories
            .iter()
            .map(|c| CategoryRow {
                icon: category_icon(&c.category),
                category: capitalize(&c.category),
                amount: c.total.format_with_symbol(symbol),
                count: c.count,
                percentage: format!("{}%", c.percentage),
            })
            .collect();

        let mut output = String::from("Spending by Category\n");
        output.push_str(&render_table(rows, 2));
        output.push('\n');
        output.push_str(&format!(
            "Total: {}\n",
            self.total.format_with_symbol(symbol)
        ));
        output
    }
}
