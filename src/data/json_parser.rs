//! JSON export and re-import
//!
//! Renders a table as a pretty-printed array of row objects, and reads such
//! an array back into a table.

use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, Table};
use serde_json::Value;

/// Convert a table to JSON string content (array of objects, 2-space indent)
pub fn write_json_content(table: &Table) -> String {
    serde_json::to_string_pretty(table).unwrap_or_else(|_| "[]".to_string())
}

/// Alias matching the download boundary's naming
pub fn to_json(table: &Table) -> String {
    write_json_content(table)
}

/// Parse JSON content (an array of objects) into a table.
///
/// Columns are the union of object keys in first-seen order; keys missing
/// from an object become empty cells.
pub fn parse_json_content(json: &str) -> DataResult<Table> {
    let value: Value = serde_json::from_str(json)?;
    let array = extract_array(&value)?;

    let mut headers: Vec<String> = Vec::new();
    for item in array {
        let object = item
            .as_object()
            .ok_or_else(|| invalid("Array elements must be objects"))?;
        for key in object.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let records = array.iter().filter_map(Value::as_object).map(|object| {
        headers
            .iter()
            .map(|name| object.get(name).map(json_value_to_cell).unwrap_or(CellValue::Empty))
            .collect::<Vec<_>>()
    });

    Ok(Table::from_records(&headers, records, CellValue::Empty))
}

fn extract_array(value: &Value) -> DataResult<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| invalid("Expected an array of row objects"))
}

fn invalid(message: &str) -> DataError {
    DataError::Json(serde::de::Error::custom(message))
}

/// Convert a JSON value to a cell
fn json_value_to_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Empty),
        Value::String(s) => CellValue::Text(s.clone()),
        Value::Bool(b) => CellValue::Text(b.to_string()),
        // Nested structures are kept as their JSON text
        Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
    }
}
