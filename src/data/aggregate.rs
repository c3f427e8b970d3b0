//! Row grouping shared by the pie and bar projectors
//!
//! Rows are grouped by the string form of a key column. Groups come back in
//! first-seen order; callers truncate positionally.

use crate::types::Table;
use std::collections::HashMap;

/// One group of rows sharing a key
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// String form of the key cell
    pub key: String,
    /// Number of rows in the group
    pub count: usize,
    /// Per value column sums, in the order the columns were requested
    pub sums: Vec<f64>,
}

/// Group rows by `key_column`, summing each of `value_columns`.
///
/// Every sum starts at 0 and accumulates with "number or 0" coercion, so
/// missing and non-numeric cells contribute nothing.
pub fn group_by(table: &Table, key_column: usize, value_columns: &[usize]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in table.rows() {
        let key = row.get(key_column).map(|c| c.to_string()).unwrap_or_default();
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(Group {
                key,
                count: 0,
                sums: vec![0.0; value_columns.len()],
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.count += 1;
        for (sum, &column) in group.sums.iter_mut().zip(value_columns) {
            *sum += row.get(column).map(|c| c.to_f64_or_zero()).unwrap_or(0.0);
        }
    }

    groups
}

/// Count occurrences of each distinct value of `column`, in first-seen order
pub fn count_by(table: &Table, column: usize) -> Vec<(String, usize)> {
    group_by(table, column, &[])
        .into_iter()
        .map(|group| (group.key, group.count))
        .collect()
}
