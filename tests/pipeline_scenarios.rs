use gridview_core::ingestion::json::ingest_json_from_path;
use gridview_core::pipeline::{run_pipeline, TableState};
use gridview_core::reader::CellReader;
use gridview_core::types::{
    find_group, GroupObject, SortObject, TableData, TotalMode, TotalsMap,
};

fn orders() -> TableData {
    ingest_json_from_path("tests/fixtures/orders.json").unwrap()
}

fn ids(rows: &[gridview_core::types::Row]) -> Vec<&str> {
    rows.iter().map(|r| r.id.as_deref().unwrap_or("")).collect()
}

fn sum_state() -> TableState {
    TableState {
        totals: TotalsMap::from([("FLD3".to_string(), TotalMode::Sum)]),
        ..Default::default()
    }
}

#[test]
fn footer_sums_raw_keys() {
    let out = run_pipeline(&orders(), &sum_state(), &CellReader::default());
    assert!((out.footer["FLD3"] - 654.64).abs() < 1e-9);
}

#[test]
fn distinct_values_make_singleton_groups_in_first_seen_order() {
    let state = TableState {
        groups: vec![GroupObject::new("FLD2")],
        ..sum_state()
    };
    let out = run_pipeline(&orders(), &state, &CellReader::default());

    let labels: Vec<&str> = out
        .rows
        .iter()
        .map(|r| r.group.as_ref().unwrap().label.as_str())
        .collect();
    assert_eq!(labels, vec!["CASFRA", "PARFRA", "DELGIO", "SANCOS"]);
    for row in &out.rows {
        let group = row.group.as_ref().unwrap();
        assert_eq!(group.children.len(), 1);
        assert_eq!(group.obj.t, "CN");
    }

    let delgio = find_group(&out.rows, "FLD2:DELGIO").unwrap();
    assert!((delgio.group.as_ref().unwrap().totals["FLD3"] - 221.23).abs() < 1e-9);
    // Footer is independent of grouping.
    assert!((out.footer["FLD3"] - 654.64).abs() < 1e-9);
}

#[test]
fn descending_numeric_sort() {
    let state = TableState {
        sort: vec![SortObject::descending("FLD3")],
        ..Default::default()
    };
    let out = run_pipeline(&orders(), &state, &CellReader::default());
    let amounts: Vec<&str> = out.rows.iter().map(|r| r.value("FLD3")).collect();
    assert_eq!(amounts, vec!["221,23", "187,59", "145,22", "100,60"]);
}

#[test]
fn second_page_of_two() {
    let state = TableState {
        current_page: 2,
        rows_per_page: 2,
        ..Default::default()
    };
    let out = run_pipeline(&orders(), &state, &CellReader::default());
    assert_eq!(ids(&out.paginated_rows), vec!["r3", "r4"]);
    assert_eq!(out.page_count, 2);
    assert_eq!(out.current_page, 2);
}

#[test]
fn state_deserialized_from_camel_case_json() {
    let text = std::fs::read_to_string("tests/fixtures/state.json").unwrap();
    let state: TableState = serde_json::from_str(&text).unwrap();
    assert!(state.force_one_line);

    let out = run_pipeline(&orders(), &state, &CellReader::default());
    assert_eq!(ids(&out.paginated_rows), vec!["r2", "r1"]);
    assert!((out.footer["FLD3"] - 654.64).abs() < 1e-9);
}

#[test]
fn global_filter_skips_hidden_columns_but_column_filters_do_not() {
    let data = orders();
    let mut state = TableState {
        global_filter: "urgent".to_string(),
        ..Default::default()
    };
    let out = run_pipeline(&data, &state, &CellReader::default());
    assert!(out.rows.is_empty());
    assert_eq!(out.page_count, 0);

    state.global_filter.clear();
    state.filters.insert("FLD4".to_string(), "urgent".to_string());
    let out = run_pipeline(&data, &state, &CellReader::default());
    assert_eq!(ids(&out.rows), vec!["r1", "r3"]);
}

#[test]
fn unknown_columns_degrade_gracefully() {
    let data = orders();
    let state = TableState {
        sort: vec![SortObject::ascending("NOPE")],
        ..Default::default()
    };
    let out = run_pipeline(&data, &state, &CellReader::default());
    assert_eq!(ids(&out.rows), vec!["r1", "r2", "r3", "r4"]);

    let state = TableState {
        groups: vec![GroupObject::new("FLD2"), GroupObject::new("NOPE")],
        ..Default::default()
    };
    let out = run_pipeline(&data, &state, &CellReader::default());
    assert!(out.rows.is_empty());
}

#[test]
fn runs_are_deterministic_and_leave_input_untouched() {
    let data = orders();
    let state = TableState {
        groups: vec![GroupObject::new("FLD2")],
        sort: vec![SortObject::descending("FLD3")],
        expand_groups: true,
        ..sum_state()
    };
    let first = run_pipeline(&data, &state, &CellReader::default());
    let second = run_pipeline(&data, &state, &CellReader::default());
    assert_eq!(first, second);
    // Original unchanged
    assert_eq!(data, orders());
}
