//! Column set helpers: visibility, lookup, drag reordering and repeated-value hiding.

use crate::types::{Cell, Column, GroupObject, Row};

pub fn column_by_name<'a>(columns: &'a [Column], name: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.name == name)
}

/// Columns shown by the table.
///
/// A column is visible unless its own `visible` flag is false or it is grouped by a
/// [`GroupObject`] whose `visible` flag is false.
pub fn visible_columns<'a>(columns: &'a [Column], groups: &[GroupObject]) -> Vec<&'a Column> {
    columns
        .iter()
        .filter(|column| column.visible)
        .filter(|column| {
            groups
                .iter()
                .find(|g| g.column == column.name)
                .is_none_or(|g| g.visible)
        })
        .collect()
}

/// Names of [`visible_columns`], in column order.
pub fn visible_column_names(columns: &[Column], groups: &[GroupObject]) -> Vec<String> {
    visible_columns(columns, groups)
        .into_iter()
        .map(|c| c.name.clone())
        .collect()
}

/// Move the column at `sorted_index` so it lands at `receiving_index`.
///
/// Returns `false` and leaves `columns` untouched when either index is out of range.
pub fn move_column(columns: &mut Vec<Column>, receiving_index: usize, sorted_index: usize) -> bool {
    if receiving_index >= columns.len() || sorted_index >= columns.len() {
        return false;
    }
    let moved = columns.remove(sorted_index);
    columns.insert(receiving_index, moved);
    true
}

/// Whether `cell` should be blanked because it repeats the previous sibling row's value.
pub fn hides_repetition(column: &Column, cell: &Cell, previous: Option<&Row>) -> bool {
    column.hide_values_repetitions
        && previous
            .and_then(|row| row.cell(&column.name))
            .is_some_and(|prev| prev.value == cell.value)
}
