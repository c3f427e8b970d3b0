//! Delimited text parsing and CSV export
//!
//! Parses comma-separated text into a [`Table`] with per-value coercion, and
//! renders a table back to CSV text.
//!
//! ## Limitations
//!
//! Splitting is positional on `,`. Quoted fields containing commas are not
//! recognized on input and values containing commas are not quoted on output.

use crate::types::{parse_number, CellValue, Table};
use tracing::debug;

/// Parse delimited text content into a table.
///
/// The whole input is trimmed and split on `\n`; the first line is the
/// header. Input with fewer than two lines yields an empty table, which the
/// upload layer reports as "no data".
pub fn parse_delimited(content: &str) -> Table {
    let lines: Vec<&str> = content.trim().split('\n').collect();
    if lines.len() < 2 {
        debug!(lines = lines.len(), "Delimited text has no data lines");
        return Table::empty();
    }

    let headers: Vec<String> = split_line(lines[0]).map(str::to_string).collect();

    let records = lines[1..]
        .iter()
        .map(|line| split_line(line).map(coerce_token).collect::<Vec<_>>());

    let table = Table::from_records(&headers, records, CellValue::text(""));
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "Parsed delimited text"
    );
    table
}

/// Split a line on `,`, trimming and unquoting each field
fn split_line(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(unquote)
}

/// Trim a field and remove surrounding double quotes
fn unquote(field: &str) -> &str {
    field.trim().trim_matches('"')
}

/// Convert a trimmed token into a cell.
///
/// Tokens that read as a number become [`CellValue::Number`]; everything else,
/// including the empty string, stays [`CellValue::Text`].
///
/// # Examples
/// - `"42"` -> `Number(42.0)`
/// - `"-1.5e3"` -> `Number(-1500.0)`
/// - `"42abc"` -> `Text("42abc")`
/// - `""` -> `Text("")`
pub fn coerce_token(token: &str) -> CellValue {
    match parse_number(token) {
        Some(n) => CellValue::Number(n),
        None => CellValue::Text(token.to_string()),
    }
}

/// Convert a table to CSV string content.
///
/// The header line is the column list, each following line is a row's values
/// in column order. Values are written verbatim without quoting.
pub fn write_csv_content(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.row_count() + 1);
    lines.push(table.columns().join(","));

    for row in table.rows() {
        let cells: Vec<String> = row.cells().iter().map(|cell| cell.to_string()).collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Alias matching the download boundary's naming
pub fn to_csv(table: &Table) -> String {
    write_csv_content(table)
}
