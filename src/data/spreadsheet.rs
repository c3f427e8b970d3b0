//! Spreadsheet decoding
//!
//! Reads the first worksheet of an xlsx/xls workbook held in memory and
//! converts its cell grid into a [`Table`], keeping each cell's native type.

use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, Table};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::collections::HashMap;
use std::io::Cursor;
use tracing::debug;

/// Header name used for blank header cells
const EMPTY_HEADER: &str = "__EMPTY";

/// Decode workbook bytes and convert the first sheet to a table.
///
/// The workbook format is sniffed from the bytes, so both `.xlsx` and `.xls`
/// payloads are accepted regardless of the file name.
pub fn parse_spreadsheet(bytes: &[u8]) -> DataResult<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DataError::MalformedSpreadsheet("No worksheet found".to_string()))??;

    let table = range_to_table(&range);
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "Parsed spreadsheet"
    );
    Ok(table)
}

/// Convert a cell range to a table keyed by its first row
fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Table::empty();
    };

    let headers = unique_headers(header_row.iter().map(header_name));

    let records = rows
        .filter(|row| !row.iter().all(is_blank))
        .map(|row| row.iter().map(cell_to_value).collect::<Vec<_>>());

    Table::from_records(&headers, records, CellValue::Empty)
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Header text for a cell; blanks become `__EMPTY`
fn header_name(cell: &Data) -> String {
    if is_blank(cell) {
        return EMPTY_HEADER.to_string();
    }
    match cell_to_value(cell) {
        CellValue::Empty => EMPTY_HEADER.to_string(),
        value => value.to_string(),
    }
}

/// Disambiguate repeated headers with `_1`, `_2`, ... suffixes
fn unique_headers(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();

    for name in names {
        let count = seen.entry(name.clone()).or_insert(0);
        let header = if *count == 0 {
            name.clone()
        } else {
            format!("{}_{}", name, count)
        };
        *count += 1;
        seen.entry(header.clone()).or_insert(1);
        headers.push(header);
    }

    headers
}

/// Convert a worksheet cell to a cell value, preserving its native type
fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::Text(s.clone())
        }
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}
