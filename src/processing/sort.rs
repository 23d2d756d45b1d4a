//! Stable multi-key sorting of rows and, recursively, of group children.

use std::cmp::Ordering;

use crate::classify::SemanticKind;
use crate::reader::CellReader;
use crate::types::{Row, SortMode, SortObject};

/// Sort `rows` by `sort` keys, first key first.
///
/// - Numeric cells compare numerically; values that fail to parse sort lowest.
/// - Date cells compare by raw key; every other cell compares by display value.
/// - Ties fall through to the next key, then keep input order.
/// - Group rows keep their position. Their children are sorted independently, and leaves are
///   only reordered within runs not interrupted by a group row.
pub fn sort_rows(rows: &[Row], sort: &[SortObject], reader: &CellReader) -> Vec<Row> {
    if sort.is_empty() {
        return rows.to_vec();
    }

    let mut out = Vec::with_capacity(rows.len());
    let mut run_start = 0;
    for (i, row) in rows.iter().enumerate() {
        if let Some(group) = &row.group {
            push_sorted_run(&rows[run_start..i], sort, reader, &mut out);
            out.push(Row {
                cells: row.cells.clone(),
                id: row.id.clone(),
                actions: row.actions.clone(),
                group: Some(group.with_children(sort_rows(&group.children, sort, reader))),
            });
            run_start = i + 1;
        }
    }
    push_sorted_run(&rows[run_start..], sort, reader, &mut out);
    out
}

fn push_sorted_run(run: &[Row], sort: &[SortObject], reader: &CellReader, out: &mut Vec<Row>) {
    if run.len() < 2 {
        out.extend_from_slice(run);
        return;
    }

    let keys: Vec<Vec<SortValue<'_>>> = run
        .iter()
        .map(|row| sort.iter().map(|s| sort_value(row, &s.column, reader)).collect())
        .collect();

    let mut order: Vec<usize> = (0..run.len()).collect();
    // `sort_by` is stable, so equal keys keep input order.
    order.sort_by(|&a, &b| compare_keys(&keys[a], &keys[b], sort));
    out.extend(order.into_iter().map(|i| run[i].clone()));
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SortValue<'a> {
    Missing,
    Number(Option<f64>, &'a str),
    Text(&'a str),
}

impl<'a> SortValue<'a> {
    fn text(&self) -> &'a str {
        match *self {
            Self::Missing => "",
            Self::Number(_, text) | Self::Text(text) => text,
        }
    }
}

fn sort_value<'a>(row: &'a Row, column: &str, reader: &CellReader) -> SortValue<'a> {
    let Some(cell) = row.cell(column) else {
        return SortValue::Missing;
    };
    match reader.kind(cell) {
        SemanticKind::Number => {
            let number = reader.number(cell);
            if number.is_none() && !cell.value.trim().is_empty() {
                tracing::debug!(
                    column = %column,
                    raw = %cell.value,
                    "malformed numeric cell sorts lowest"
                );
            }
            SortValue::Number(number, &cell.value)
        }
        SemanticKind::Date if !cell.obj.k.is_empty() => SortValue::Text(&cell.obj.k),
        _ => SortValue::Text(&cell.value),
    }
}

fn compare_keys(a: &[SortValue<'_>], b: &[SortValue<'_>], sort: &[SortObject]) -> Ordering {
    a.iter()
        .zip(b)
        .zip(sort)
        .map(|((x, y), key)| {
            let ord = compare_values(x, y);
            match key.sort_mode {
                SortMode::Ascending => ord,
                SortMode::Descending => ord.reverse(),
            }
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Less,
        (_, SortValue::Missing) => Ordering::Greater,
        (SortValue::Number(x, _), SortValue::Number(y, _)) => match (x, y) {
            (Some(x), Some(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        },
        _ => a.text().cmp(b.text()),
    }
}

#[cfg(test)]
mod tests {
    use super::sort_rows;
    use crate::processing::group_rows;
    use crate::reader::CellReader;
    use crate::types::{Cell, CellObj, Column, GroupObject, Row, SortObject, TotalsMap};

    fn amounts(values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Row::leaf([("FLD3", Cell::number(*v))]).with_id(i.to_string()))
            .collect()
    }

    fn values<'a>(rows: &'a [Row], column: &str) -> Vec<&'a str> {
        rows.iter().map(|r| r.value(column)).collect()
    }

    #[test]
    fn descending_numeric_sort() {
        let rows = amounts(&["100.60", "145.22", "221.23", "187.59"]);
        let out = sort_rows(&rows, &[SortObject::descending("FLD3")], &CellReader::default());
        assert_eq!(values(&out, "FLD3"), vec!["221.23", "187.59", "145.22", "100.60"]);
    }

    #[test]
    fn numbers_compare_numerically_not_lexically() {
        let rows = amounts(&["9", "10", "100", "2"]);
        let out = sort_rows(&rows, &[SortObject::ascending("FLD3")], &CellReader::default());
        assert_eq!(values(&out, "FLD3"), vec!["2", "9", "10", "100"]);
    }

    #[test]
    fn malformed_numbers_sort_lowest() {
        let rows = vec![
            Row::leaf([("N", Cell::number("5"))]),
            Row::leaf([("N", Cell::new(CellObj::new("NR", "", ""), "n/a"))]),
            Row::leaf([("N", Cell::number("1"))]),
        ];
        let out = sort_rows(&rows, &[SortObject::ascending("N")], &CellReader::default());
        assert_eq!(values(&out, "N"), vec!["n/a", "1", "5"]);
    }

    #[test]
    fn text_sort_is_case_sensitive() {
        let rows = vec![
            Row::leaf([("T", Cell::text("beta"))]),
            Row::leaf([("T", Cell::text("Alpha"))]),
            Row::leaf([("T", Cell::text("alpha"))]),
        ];
        let out = sort_rows(&rows, &[SortObject::ascending("T")], &CellReader::default());
        assert_eq!(values(&out, "T"), vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn dates_sort_by_raw_key() {
        let date =
            |k: &str, v: &str| Row::leaf([("D", Cell::new(CellObj::new("D8", "*YYMD", k), v))]);
        let rows = vec![date("20180102", "02/01/2018"), date("20171231", "31/12/2017")];
        let out = sort_rows(&rows, &[SortObject::ascending("D")], &CellReader::default());
        assert_eq!(values(&out, "D"), vec!["31/12/2017", "02/01/2018"]);
    }

    #[test]
    fn ties_use_next_key_then_input_order() {
        let row = |a: &str, b: &str, id: &str| {
            Row::leaf([("A", Cell::text(a)), ("B", Cell::number(b))]).with_id(id)
        };
        let rows = vec![
            row("x", "2", "r0"),
            row("y", "1", "r1"),
            row("x", "1", "r2"),
            row("x", "2", "r3"),
        ];

        let out = sort_rows(
            &rows,
            &[SortObject::ascending("A"), SortObject::descending("B")],
            &CellReader::default(),
        );
        let ids: Vec<_> = out.iter().map(|r| r.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["r0", "r3", "r2", "r1"]);
    }

    #[test]
    fn unknown_sort_column_keeps_order() {
        let rows = amounts(&["3", "1", "2"]);
        let out = sort_rows(&rows, &[SortObject::ascending("NOPE")], &CellReader::default());
        assert_eq!(out, rows);
    }

    #[test]
    fn sorting_stays_inside_groups() {
        let columns = vec![Column::new("G", "Group"), Column::new("FLD3", "Amount")];
        let row = |g: &str, v: &str| Row::leaf([("G", Cell::text(g)), ("FLD3", Cell::number(v))]);
        let rows = vec![row("b", "1"), row("a", "9"), row("b", "5"), row("a", "3")];
        let grouped = group_rows(
            &columns,
            &rows,
            &[GroupObject::new("G")],
            &TotalsMap::new(),
            &CellReader::default(),
        );

        let out = sort_rows(&grouped, &[SortObject::descending("FLD3")], &CellReader::default());
        let labels: Vec<_> = out.iter().map(|r| r.group.as_ref().unwrap().label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(values(&out[0].group.as_ref().unwrap().children, "FLD3"), vec!["5", "1"]);
        assert_eq!(values(&out[1].group.as_ref().unwrap().children, "FLD3"), vec!["9", "3"]);
    }
}
