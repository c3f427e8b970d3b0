//! Column type inference
//!
//! Classifies every column as numeric, textual, or both by scanning its
//! values. Classification is recomputed from the table on every call.

use crate::types::Table;
use serde::Serialize;

/// Numeric and text column membership, each in table column order.
///
/// A column holding both numbers and strings appears in both lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColumnClassification {
    pub numeric_columns: Vec<String>,
    pub text_columns: Vec<String>,
}

impl ColumnClassification {
    pub fn is_numeric(&self, column: &str) -> bool {
        self.numeric_columns.iter().any(|c| c == column)
    }

    pub fn is_text(&self, column: &str) -> bool {
        self.text_columns.iter().any(|c| c == column)
    }

    pub fn first_text(&self) -> Option<&str> {
        self.text_columns.first().map(String::as_str)
    }

    /// First numeric column that is not `excluded`
    pub fn first_numeric_except(&self, excluded: Option<&str>) -> Option<&str> {
        self.numeric_columns
            .iter()
            .map(String::as_str)
            .find(|c| Some(*c) != excluded)
    }
}

/// Classify the columns of a table.
pub fn classify(table: &Table) -> ColumnClassification {
    let mut classification = ColumnClassification::default();

    for (index, name) in table.columns().iter().enumerate() {
        if table.column_values(index).any(|v| v.is_number()) {
            classification.numeric_columns.push(name.clone());
        }
        if table.column_values(index).any(|v| v.is_text()) {
            classification.text_columns.push(name.clone());
        }
    }

    classification
}

/// Figures shown in a dashboard header
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    pub columns: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub text_columns: Vec<String>,
}

impl DatasetSummary {
    pub fn from_table(table: &Table) -> Self {
        let ColumnClassification {
            numeric_columns,
            text_columns,
        } = classify(table);

        Self {
            total_rows: table.row_count(),
            total_columns: table.column_count(),
            columns: table.columns().to_vec(),
            numeric_columns,
            text_columns,
        }
    }
}
