//! Column aggregates (count / sum / average) over a row set.

use crate::reader::CellReader;
use crate::types::{for_each_leaf, Row, TotalMode, Totals, TotalsMap};

/// Compute the requested aggregate for every column in `totals`.
///
/// Aggregates run over the leaf rows of `rows` (group rows contribute their descendants).
///
/// - `Count`: leaves with a non-empty value in the column.
/// - `Sum`: sum of numeric values; non-numeric cells contribute `0`.
/// - `Average`: `Sum / Count`, or `0` when nothing was counted.
pub fn calc_totals(rows: &[Row], totals: &TotalsMap, reader: &CellReader) -> Totals {
    let mut leaves = Vec::new();
    for_each_leaf(rows, &mut |row| leaves.push(row));
    calc_totals_over(&leaves, totals, reader)
}

pub(crate) fn calc_totals_over(leaves: &[&Row], totals: &TotalsMap, reader: &CellReader) -> Totals {
    totals
        .iter()
        .map(|(column, mode)| {
            let acc = accumulate(leaves, column, reader);
            (column.clone(), acc.value(*mode))
        })
        .collect()
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    count: usize,
    sum: f64,
}

impl Accumulator {
    fn value(self, mode: TotalMode) -> f64 {
        match mode {
            TotalMode::Count => self.count as f64,
            TotalMode::Sum => self.sum,
            TotalMode::Average if self.count == 0 => 0.0,
            TotalMode::Average => self.sum / self.count as f64,
        }
    }
}

fn accumulate(leaves: &[&Row], column: &str, reader: &CellReader) -> Accumulator {
    let mut acc = Accumulator::default();
    for cell in leaves.iter().filter_map(|row| row.cell(column)) {
        if cell.value.trim().is_empty() {
            continue;
        }
        acc.count += 1;
        match reader.number(cell) {
            Some(v) => acc.sum += v,
            None => tracing::debug!(
                column = %column,
                raw = %cell.value,
                "non-numeric cell counted as zero in totals"
            ),
        }
    }
    acc
}
