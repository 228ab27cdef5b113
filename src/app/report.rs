//! Tabular presentation of log file listings
//!
//! Pure formatting: no network or filesystem access. Rows are ordered by
//! modification time so the freshest files end up at the bottom of the
//! terminal, next to the prompt.

use chrono::DateTime;
use comfy_table::{presets::NOTHING, Cell, Table};

use crate::app::models::LogFileInfo;

/// Renders descriptors as an aligned table, oldest first.
///
/// The sort by `lastModified` is stable: ties keep their listing order.
pub fn render_file_table(files: &[LogFileInfo]) -> String {
    let mut rows: Vec<&LogFileInfo> = files.iter().collect();
    rows.sort_by_key(|f| f.last_modified);

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        "Name",
        "Description",
        "Size",
        "ProcessID",
        "LastModified",
    ]);

    for file in rows {
        table.add_row(vec![
            Cell::new(&file.name),
            Cell::new(&file.description),
            Cell::new(file.size),
            Cell::new(&file.process_id),
            Cell::new(format_last_modified(file.last_modified)),
        ]);
    }

    table.to_string()
}

/// Formats an epoch-millisecond timestamp as UTC wall-clock time.
///
/// Values chrono cannot represent fall back to the raw integer.
pub fn format_last_modified(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}
