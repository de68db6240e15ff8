//! Display formatting for terminal output
//!
//! Date and icon helpers used by every report, plus table rendering.

pub mod format;
pub mod table;

pub use format::{
    capitalize, category_icon, format_bar, format_display_date, format_display_date_str,
    format_short_date, parse_date, truncate, DEFAULT_ICON,
};
pub use table::render_table;
