//! Built-in sample expenses shown when no data file is given

use chrono::NaiveDate;

use crate::models::{ExpenseRecord, Money};

/// (year, month, day, category, whole dollars, time of day)
type SeedRow = (i32, u32, u32, &'static str, i64, &'static str);

const SEED_ROWS: &[SeedRow] = &[
    // 2024
    (2024, 10, 10, "food", 12, "12:15PM"),
    (2024, 10, 12, "transport", 22, "07:45AM"),
    (2024, 10, 28, "groceries", 85, "05:30PM"),
    (2024, 11, 5, "entertainment", 40, "08:00PM"),
    (2024, 11, 11, "food", 18, "01:30PM"),
    (2024, 11, 23, "subscriptions", 12, "10:00AM"),
    (2024, 12, 1, "utilities", 90, "03:20PM"),
    (2024, 12, 17, "groceries", 130, "06:45PM"),
    (2024, 12, 21, "transport", 55, "09:00AM"),
    (2024, 12, 29, "gifts", 75, "04:50PM"),
    // 2025
    (2025, 1, 5, "food", 15, "11:00AM"),
    (2025, 1, 12, "transport", 40, "08:30AM"),
    (2025, 1, 20, "entertainment", 30, "09:15PM"),
    (2025, 1, 25, "subscriptions", 10, "08:00AM"),
    (2025, 2, 3, "groceries", 120, "04:00PM"),
    (2025, 2, 7, "gifts", 60, "05:15PM"),
    (2025, 2, 11, "food", 18, "01:00PM"),
    (2025, 2, 25, "transport", 60, "07:45AM"),
    (2025, 3, 1, "utilities", 95, "02:30PM"),
    (2025, 3, 5, "transport", 35, "10:30AM"),
    (2025, 3, 12, "food", 15, "11:00AM"),
    (2025, 3, 15, "food", 22, "12:45PM"),
    (2025, 3, 19, "entertainment", 50, "09:00PM"),
    (2025, 3, 22, "entertainment", 45, "08:50PM"),
    (2025, 3, 28, "groceries", 110, "06:15PM"),
];

/// Build the sample expense list in its original order
pub fn seed_records() -> Vec<ExpenseRecord> {
    SEED_ROWS
        .iter()
        .filter_map(|&(year, month, day, category, dollars, time)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| ExpenseRecord::new(date, category, Money::from_units(dollars), time))
        })
        .collect()
}
