//! Hierarchical grouping of leaf rows.
//!
//! Each [`GroupObject`] adds one nesting level; the first is outermost. Within a level rows are
//! bucketed by the exact display value of the grouping column, in first-seen order. Buckets
//! become group rows whose children are either the next level's groups or the bucket's leaves,
//! and whose totals cover every descendant leaf.

use std::collections::HashMap;

use crate::columns::column_by_name;
use crate::reader::CellReader;
use crate::types::{CellObj, Column, GroupInfo, GroupObject, Row, TotalsMap};

use super::totals::calc_totals_over;

/// Group `rows` by `groups`, computing per-group `totals`.
///
/// - An empty `groups` list returns the rows unchanged.
/// - A grouping column missing from `columns` yields no groups for that level; because empty
///   groups are pruned, the enclosing groups disappear as well.
/// - Every group starts collapsed; expansion is applied by the orchestrator.
pub fn group_rows(
    columns: &[Column],
    rows: &[Row],
    groups: &[GroupObject],
    totals: &TotalsMap,
    reader: &CellReader,
) -> Vec<Row> {
    if groups.is_empty() {
        return rows.to_vec();
    }
    let leaves: Vec<&Row> = rows.iter().collect();
    let level = Level {
        columns,
        totals,
        reader,
    };
    level.build(&leaves, groups, None)
}

struct Level<'c> {
    columns: &'c [Column],
    totals: &'c TotalsMap,
    reader: &'c CellReader,
}

struct Bucket<'a> {
    label: &'a str,
    obj: Option<&'a CellObj>,
    rows: Vec<&'a Row>,
}

impl Level<'_> {
    fn build(&self, rows: &[&Row], groups: &[GroupObject], parent_id: Option<&str>) -> Vec<Row> {
        let Some((group, rest)) = groups.split_first() else {
            return rows.iter().map(|row| (*row).clone()).collect();
        };

        if column_by_name(self.columns, &group.column).is_none() {
            tracing::warn!(
                column = %group.column,
                "grouping column not found; level yields no groups"
            );
            return Vec::new();
        }

        partition(rows, &group.column)
            .into_iter()
            .filter_map(|bucket| {
                let id = group_id(parent_id, &group.column, bucket.label);
                let children = self.build(&bucket.rows, rest, Some(id.as_str()));
                if children.is_empty() {
                    return None;
                }
                Some(Row::group(GroupInfo {
                    parent_id: parent_id.map(str::to_string),
                    column: group.column.clone(),
                    expanded: false,
                    label: bucket.label.to_string(),
                    obj: bucket.obj.cloned().unwrap_or_default(),
                    children,
                    totals: calc_totals_over(&bucket.rows, self.totals, self.reader),
                    id,
                }))
            })
            .collect()
    }
}

fn partition<'a>(rows: &[&'a Row], column: &str) -> Vec<Bucket<'a>> {
    let mut buckets: Vec<Bucket<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for &row in rows {
        let cell = row.cell(column);
        let label = cell.map(|c| c.value.as_str()).unwrap_or("");
        match index.get(label) {
            Some(&i) => buckets[i].rows.push(row),
            None => {
                index.insert(label, buckets.len());
                buckets.push(Bucket {
                    label,
                    obj: cell.map(|c| &c.obj),
                    rows: vec![row],
                });
            }
        }
    }
    buckets
}

/// Derive a group id from its grouping path: `column:value` segments joined by `/`.
///
/// `/` and `\` inside values are escaped so distinct paths never collide.
pub fn group_id(parent_id: Option<&str>, column: &str, label: &str) -> String {
    let escaped = label.replace('\\', "\\\\").replace('/', "\\/");
    match parent_id {
        Some(parent) => format!("{parent}/{column}:{escaped}"),
        None => format!("{column}:{escaped}"),
    }
}
