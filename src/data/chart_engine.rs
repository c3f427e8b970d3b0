//! Chart data projection engine
//!
//! Turns a [`Table`] into the series each chart kind consumes. Every
//! projector is a pure read of the table: column roles are inferred from
//! [`classify`], groups keep first-seen order and caps are applied by
//! position, never by magnitude.

use crate::constants::{
    AREA_STACK_ID, BAR_MAX_GROUPS, PIE_COLORS, PIE_MAX_SLICES, SEQUENCE_MAX_POINTS,
    SERIES_HUE_STEP, SERIES_LIGHTNESS, SERIES_SATURATION,
};
use crate::data::aggregate::{count_by, group_by};
use crate::data::inference::{classify, ColumnClassification};
use crate::types::{ChartKind, Table};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

// ============================================================================
// Output Types
// ============================================================================

/// A single pie slice
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PiePoint {
    pub name: String,
    pub value: f64,
}

/// X-axis key of a bar or sequence point
#[derive(Clone, Debug, PartialEq)]
pub enum AxisKey {
    /// Category label (bar charts), serialized as `name`
    Label(String),
    /// 1-based row position (line/area charts), serialized as `index`
    Index(usize),
}

/// A point carrying one value per numeric column.
///
/// Serializes flat, e.g. `{"name": "north", "sales": 12, "cost": 4}`.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub key: AxisKey,
    pub values: Vec<(String, f64)>,
}

impl SeriesPoint {
    /// Value of one series at this point
    pub fn value(&self, column: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| *v)
    }

    pub fn label(&self) -> Option<&str> {
        match &self.key {
            AxisKey::Label(label) => Some(label),
            AxisKey::Index(_) => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self.key {
            AxisKey::Index(i) => Some(i),
            AxisKey::Label(_) => None,
        }
    }
}

impl Serialize for SeriesPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        match &self.key {
            AxisKey::Label(label) => map.serialize_entry("name", label)?,
            AxisKey::Index(index) => map.serialize_entry("index", index)?,
        }
        for (column, value) in &self.values {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Per-chart caps on the number of emitted points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLimits {
    pub pie_max_slices: usize,
    pub bar_max_groups: usize,
    pub sequence_max_points: usize,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self {
            pie_max_slices: PIE_MAX_SLICES,
            bar_max_groups: BAR_MAX_GROUPS,
            sequence_max_points: SEQUENCE_MAX_POINTS,
        }
    }
}

// ============================================================================
// Projectors
// ============================================================================

/// Project a table into pie slices using the default cap
pub fn project_pie(table: &Table) -> Vec<PiePoint> {
    project_pie_with(table, &ChartLimits::default())
}

/// Project a table into at most `limits.pie_max_slices` pie slices.
///
/// Slices group the first text column and sum the first other numeric
/// column. Without such a pair, the slices count the distinct values of the
/// first column instead.
pub fn project_pie_with(table: &Table, limits: &ChartLimits) -> Vec<PiePoint> {
    if table.is_empty() || table.column_count() == 0 {
        return Vec::new();
    }

    let classification = classify(table);
    let category = classification.first_text();
    let value = classification.first_numeric_except(category);

    let category_idx = category.and_then(|c| table.column_index(c));
    let value_idx = value.and_then(|c| table.column_index(c));

    let slices: Vec<PiePoint> = match (category_idx, value_idx) {
        (Some(category_idx), Some(value_idx)) => group_by(table, category_idx, &[value_idx])
            .into_iter()
            .map(|group| PiePoint {
                name: group.key,
                value: group.sums[0],
            })
            .collect(),
        _ => {
            debug!(
                column = %table.columns()[0],
                "No category/value column pair, counting first column"
            );
            count_by(table, 0)
                .into_iter()
                .map(|(name, count)| PiePoint {
                    name,
                    value: count as f64,
                })
                .collect()
        }
    };

    slices.into_iter().take(limits.pie_max_slices).collect()
}

/// Project a table into bar groups using the default cap
pub fn project_bar(table: &Table) -> Vec<SeriesPoint> {
    project_bar_with(table, &ChartLimits::default())
}

/// Project a table into at most `limits.bar_max_groups` bars.
///
/// With a text column the rows are grouped by the first one and every
/// numeric column is summed per group; otherwise the first rows are used
/// as-is and labelled `Row 1`, `Row 2`, ...
pub fn project_bar_with(table: &Table, limits: &ChartLimits) -> Vec<SeriesPoint> {
    let classification = classify(table);
    let numeric = numeric_indices(table, &classification);
    if numeric.is_empty() {
        return Vec::new();
    }

    match classification.first_text().and_then(|c| table.column_index(c)) {
        Some(key_idx) => group_by(table, key_idx, &numeric_positions(&numeric))
            .into_iter()
            .take(limits.bar_max_groups)
            .map(|group| SeriesPoint {
                key: AxisKey::Label(group.key),
                values: numeric
                    .iter()
                    .map(|(name, _)| name.clone())
                    .zip(group.sums)
                    .collect(),
            })
            .collect(),
        None => table
            .rows()
            .iter()
            .take(limits.bar_max_groups)
            .enumerate()
            .map(|(i, row)| SeriesPoint {
                key: AxisKey::Label(format!("Row {}", i + 1)),
                values: row_values(row, &numeric),
            })
            .collect(),
    }
}

/// Project a table into a line/area sequence using the default cap
pub fn project_sequence(table: &Table) -> Vec<SeriesPoint> {
    project_sequence_with(table, &ChartLimits::default())
}

/// Project the first `limits.sequence_max_points` rows into an indexed sequence.
///
/// Returns an empty sequence when the table has no numeric column.
pub fn project_sequence_with(table: &Table, limits: &ChartLimits) -> Vec<SeriesPoint> {
    let classification = classify(table);
    let numeric = numeric_indices(table, &classification);
    if numeric.is_empty() {
        return Vec::new();
    }

    table
        .rows()
        .iter()
        .take(limits.sequence_max_points)
        .enumerate()
        .map(|(i, row)| SeriesPoint {
            key: AxisKey::Index(i + 1),
            values: row_values(row, &numeric),
        })
        .collect()
}

pub fn project_line(table: &Table) -> Vec<SeriesPoint> {
    project_sequence(table)
}

/// Same data as [`project_line`]; stacking is a styling concern, see [`series_styles`]
pub fn project_area(table: &Table) -> Vec<SeriesPoint> {
    project_sequence(table)
}

/// Numeric columns paired with their table positions
fn numeric_indices(table: &Table, classification: &ColumnClassification) -> Vec<(String, usize)> {
    classification
        .numeric_columns
        .iter()
        .filter_map(|name| table.column_index(name).map(|idx| (name.clone(), idx)))
        .collect()
}

fn numeric_positions(numeric: &[(String, usize)]) -> Vec<usize> {
    numeric.iter().map(|(_, idx)| *idx).collect()
}

fn row_values(row: &crate::types::Row, numeric: &[(String, usize)]) -> Vec<(String, f64)> {
    numeric
        .iter()
        .map(|(name, idx)| {
            let value = row.get(*idx).map(|c| c.to_f64_or_zero()).unwrap_or(0.0);
            (name.clone(), value)
        })
        .collect()
}

// ============================================================================
// Styling
// ============================================================================

/// An HSL color with percentage saturation and lightness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u32,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    /// Color of the numeric series at `index`; the hue wraps every 6 series
    pub fn for_series(index: usize) -> Self {
        Self {
            hue: ((index % 6) as u32 * SERIES_HUE_STEP) % 360,
            saturation: SERIES_SATURATION,
            lightness: SERIES_LIGHTNESS,
        }
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rendering hints for one numeric series
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub column: String,
    pub label: String,
    pub color: Hsl,
    /// Stack group id; set for area charts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
}

impl SeriesStyle {
    pub fn is_stacked(&self) -> bool {
        self.stack_id.is_some()
    }
}

/// Style every numeric series of a bar, line or area chart.
///
/// Pie charts color slices rather than series and get no styles here; use
/// [`pie_slice_color`].
pub fn series_styles(classification: &ColumnClassification, kind: ChartKind) -> Vec<SeriesStyle> {
    if kind == ChartKind::Pie {
        return Vec::new();
    }

    classification
        .numeric_columns
        .iter()
        .enumerate()
        .map(|(i, column)| SeriesStyle {
            column: column.clone(),
            label: column.clone(),
            color: Hsl::for_series(i),
            stack_id: (kind == ChartKind::Area).then(|| AREA_STACK_ID.to_string()),
        })
        .collect()
}

/// Palette color of the pie slice at `index`
pub fn pie_slice_color(index: usize) -> &'static str {
    PIE_COLORS[index % PIE_COLORS.len()]
}
