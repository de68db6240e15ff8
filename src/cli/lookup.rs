//! Small lookup commands: category icons and display dates

use crate::display::{category_icon, format_display_date_str};
use crate::error::FintrixResult;

/// Print the icon for a category
pub fn handle_icon_command(category: &str) {
    println!("{}", category_icon(category));
}

/// Print a YYYY-MM-DD date in display form
pub fn handle_date_command(date: &str) -> FintrixResult<()> {
    println!("{}", format_display_date_str(date)?);
    Ok(())
}
