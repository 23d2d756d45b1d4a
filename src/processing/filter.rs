//! Row filtering by per-column and global substring filters.

use crate::types::{Filters, Row};

/// Returns the rows that pass both the per-column filters and the global filter.
///
/// - A row passes the per-column filters when, for every column with a non-empty filter, that
///   column's cell value contains the filter text.
/// - A row passes a non-empty `global_filter` when any of `visible_columns` contains it.
///
/// Matching is case-sensitive substring containment. The input is never modified.
pub fn filter_rows<S: AsRef<str>>(
    rows: &[Row],
    filters: &Filters,
    global_filter: &str,
    visible_columns: &[S],
) -> Vec<Row> {
    let active: Vec<(&str, &str)> = filters
        .iter()
        .filter(|(_, needle)| !needle.is_empty())
        .map(|(column, needle)| (column.as_str(), needle.as_str()))
        .collect();

    if active.is_empty() && global_filter.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            passes_column_filters(row, &active)
                && passes_global_filter(row, global_filter, visible_columns)
        })
        .cloned()
        .collect()
}

fn passes_column_filters(row: &Row, active: &[(&str, &str)]) -> bool {
    active
        .iter()
        .all(|(column, needle)| row.value(column).contains(*needle))
}

fn passes_global_filter<S: AsRef<str>>(
    row: &Row,
    global_filter: &str,
    visible_columns: &[S],
) -> bool {
    global_filter.is_empty()
        || visible_columns
            .iter()
            .any(|column| row.value(column.as_ref()).contains(global_filter))
}
