//! Table rendering for zones and records

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use ovh_dns_provider::Record;

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h).add_attribute(Attribute::Bold)));
    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        table.force_no_tty();
    }
    table
}

/// One-column table of zone names, sorted ascending.
pub fn zones_table(zones: &[String]) -> Table {
    let mut sorted: Vec<&String> = zones.iter().collect();
    sorted.sort();

    let mut table = new_table(&["Zone"]);
    for zone in sorted {
        table.add_row(vec![Cell::new(zone).fg(Color::Cyan)]);
    }
    table
}

/// Record table sorted by ID. Missing subdomain or TTL render as empty cells.
pub fn records_table(records: &[Record]) -> Table {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by_key(|r| r.id);

    let mut table = new_table(&["ID", "Type", "Subdomain", "Target", "TTL"]);
    for record in sorted {
        table.add_row(vec![
            Cell::new(record.id).add_attribute(Attribute::Dim),
            Cell::new(&record.field_type).fg(Color::Green),
            Cell::new(record.sub_domain.as_deref().unwrap_or_default()).fg(Color::Cyan),
            Cell::new(&record.target),
            Cell::new(record.ttl.map(|t| t.to_string()).unwrap_or_default())
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}
