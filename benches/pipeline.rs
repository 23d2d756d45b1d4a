use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use gridview_core::pipeline::{run_pipeline, TableState};
use gridview_core::reader::CellReader;
use gridview_core::types::{
    Cell, Column, GroupObject, Row, SortObject, TableData, TotalMode, TotalsMap,
};

const CITIES: [&str; 6] = ["Milano", "Brescia", "Bergamo", "Verona", "Torino", "Genova"];

fn synthetic_table(rows: usize) -> TableData {
    let columns = vec![
        Column::new("code", "Code"),
        Column::new("city", "City"),
        Column::new("year", "Year"),
        Column::new("amount", "Amount"),
    ];
    let rows = (0..rows)
        .map(|i| {
            Row::leaf([
                ("code", Cell::text(format!("C{i:06}"))),
                ("city", Cell::text(CITIES[i % CITIES.len()])),
                ("year", Cell::number((2000 + i % 20).to_string())),
                ("amount", Cell::number(format!("{}.{:02}", (i * 7919) % 10_000, i % 100))),
            ])
        })
        .collect();
    TableData::new(columns, rows)
}

fn bench_pipeline(c: &mut Criterion) {
    let reader = CellReader::default();
    let state = TableState {
        global_filter: "0".to_string(),
        groups: vec![GroupObject::new("city"), GroupObject::new("year")],
        sort: vec![SortObject::descending("amount"), SortObject::ascending("code")],
        totals: TotalsMap::from([
            ("amount".to_string(), TotalMode::Sum),
            ("year".to_string(), TotalMode::Average),
        ]),
        expand_groups: true,
        ..Default::default()
    };

    let mut group = c.benchmark_group("run_pipeline");
    for size in [1_000usize, 10_000, 50_000] {
        let data = synthetic_table(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| run_pipeline(black_box(data), black_box(&state), &reader))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
