//! Table rendering on top of `tabled`

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

/// Render rows as a rounded table, right-aligning columns from
/// `numeric_from` onwards.
pub fn render_table<T: Tabled>(rows: Vec<T>, numeric_from: usize) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(numeric_from..)).with(Alignment::right()));
    table.to_string()
}
