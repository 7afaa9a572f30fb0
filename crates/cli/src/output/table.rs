use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};

use panda_common::{Alert, AlertStatus};

pub fn build_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(cells);
    table
}

pub fn status_cell(status: AlertStatus) -> Cell {
    let color = match status {
        AlertStatus::Active => Color::Green,
        AlertStatus::Booked => Color::Blue,
        AlertStatus::Expired => Color::DarkGrey,
    };
    Cell::new(status.as_str()).fg(color).add_attribute(Attribute::Bold)
}

/// e.g. `Mar 1, 2026 09:30 UTC`
pub fn format_created(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M UTC").to_string()
}

pub fn alerts_table(alerts: &[Alert]) -> Table {
    let mut table = build_table(&["Country", "City", "Visa Type", "Status", "Created", "ID"]);
    for a in alerts {
        table.add_row(vec![
            Cell::new(&a.country).add_attribute(Attribute::Bold),
            Cell::new(&a.city),
            Cell::new(a.visa_type.as_str()),
            status_cell(a.status),
            Cell::new(format_created(&a.created_at)),
            Cell::new(&a.id).fg(Color::DarkGrey),
        ]);
    }
    table
}
