//! Formatting helpers shared by every terminal view
//!
//! Dates are always handled as `NaiveDate`, so a record dated 2025-03-01 is
//! shown as "Mar 01, 2025" on every host regardless of its time zone.

use chrono::NaiveDate;

use crate::error::{FintrixError, FintrixResult};

/// Glyph used for categories without a dedicated icon
pub const DEFAULT_ICON: &str = "💲";

/// Icon for a category, matched case-insensitively
pub fn category_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "food" => "🍕",
        "transport" => "🚗",
        "entertainment" => "🎮",
        "groceries" => "🛒",
        "utilities" => "💡",
        "subscriptions" => "📱",
        "gifts" => "🎁",
        _ => DEFAULT_ICON,
    }
}

/// Long display date, e.g. "Mar 28, 2025"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Parse a `YYYY-MM-DD` string as a calendar date and format it for display
pub fn format_display_date_str(s: &str) -> FintrixResult<String> {
    parse_date(s).map(format_display_date)
}

/// Short display date without the year, e.g. "Mar 1"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> FintrixResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        FintrixError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

/// Capitalize the first letter of a category for headings
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
