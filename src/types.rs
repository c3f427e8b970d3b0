//! Core types for the chartlens engine.
//!
//! This module defines the tabular data model shared by the parsers, the
//! type inferencer, the chart projectors and the export serializers.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Largest magnitude at which every whole f64 is an exact integer
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// ============================================================================
// Cells
// ============================================================================

/// A single cell value
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// True for a number that is not NaN
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(n) if !n.is_nan())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// "Number or 0" coercion used by every aggregation
    pub fn to_f64_or_zero(&self) -> f64 {
        let value = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => parse_number(s.trim()).unwrap_or(0.0),
            CellValue::Empty => 0.0,
        };
        if value.is_nan() { 0.0 } else { value }
    }
}

/// Strict float parsing: the whole token must be a number.
///
/// `Infinity` and `-Infinity` are accepted; `inf`, `nan`, hex and trailing
/// garbage are not.
pub fn parse_number(token: &str) -> Option<f64> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    if unsigned == "Infinity" {
        return Some(if token.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // str::parse alone would take "inf" and "NaN"
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    token.parse::<f64>().ok().filter(|n| !n.is_nan())
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Empty => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(n) if is_whole(*n) => serializer.serialize_i64(*n as i64),
            CellValue::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            CellValue::Number(_) | CellValue::Empty => serializer.serialize_none(),
            CellValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

/// Format a number the way it is shown to users: no trailing `.0` for whole numbers
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if is_whole(n) {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

// ============================================================================
// Rows and Tables
// ============================================================================

/// A row of cells, aligned with its table's column list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn get(&self, column: usize) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

/// An ordered set of rows sharing one ordered column schema.
///
/// Every row holds exactly one cell per column. Tables are immutable once
/// built; a new upload produces a new table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from header names and positional records.
    ///
    /// Records shorter than the header are padded with `filler`, longer
    /// records are cut. A repeated header name keeps the position of its
    /// first occurrence and the value of its last.
    pub fn from_records<I>(headers: &[String], records: I, filler: CellValue) -> Self
    where
        I: IntoIterator<Item = Vec<CellValue>>,
    {
        let mut columns: Vec<String> = Vec::with_capacity(headers.len());
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(headers.len());
        let slots: Vec<usize> = headers
            .iter()
            .map(|name| {
                *positions.entry(name.as_str()).or_insert_with(|| {
                    columns.push(name.clone());
                    columns.len() - 1
                })
            })
            .collect();

        let rows = records
            .into_iter()
            .map(|record| {
                let mut cells = vec![filler.clone(); columns.len()];
                for (index, &slot) in slots.iter().enumerate() {
                    cells[slot] = record.get(index).cloned().unwrap_or_else(|| filler.clone());
                }
                Row::new(cells)
            })
            .collect();

        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate over every cell of one column, top to bottom
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(column))
    }

    /// Look up a cell by row index and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let column = self.column_index(column)?;
        self.rows.get(row)?.get(column)
    }
}

/// A single row viewed as an object keyed by column name
struct RowRecord<'a> {
    columns: &'a [String],
    row: &'a Row,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, cell) in self.columns.iter().zip(self.row.cells()) {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

/// Tables serialize as an array of row objects with keys in column order
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowRecord {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Chart projections offered for every table
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Pie,
    Bar,
    Line,
    Area,
}
