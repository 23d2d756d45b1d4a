use gridview_core::classify::{classify, SemanticKind};
use gridview_core::ingestion::json::{ingest_json_from_path, ingest_json_from_str};
use gridview_core::GridError;

#[test]
fn ingest_json_from_path_happy_path() {
    let data = ingest_json_from_path("tests/fixtures/orders.json").unwrap();

    assert_eq!(data.columns.len(), 4);
    assert_eq!(data.row_count(), 4);
    assert_eq!(data.column("FLD3").unwrap().size, Some(120));
    assert!(!data.column("FLD4").unwrap().visible);

    let amount = data.rows[0].cell("FLD3").unwrap();
    assert_eq!(amount.value, "100,60");
    assert_eq!(classify(&amount.obj), SemanticKind::Number);
    assert_eq!(data.rows[0].id.as_deref(), Some("r1"));
}

#[test]
fn ingest_json_accepts_legacy_total_and_sort_spellings() {
    let state: gridview_core::pipeline::TableState = serde_json::from_str(
        r#"{"totals": {"FLD3": "Avarage"}, "sort": [{"column": "FLD1", "sortMode": "A"}]}"#,
    )
    .unwrap();
    assert_eq!(state.totals["FLD3"], gridview_core::types::TotalMode::Average);
    assert_eq!(state.rows_per_page, 10);
    assert_eq!(state.current_page, 1);
}

#[test]
fn ingest_json_errors_on_truncated_file() {
    let err = ingest_json_from_path("tests/fixtures/broken.json").unwrap_err();
    assert!(matches!(err, GridError::Json(_)));
    assert!(err.to_string().contains("json error"));
}

#[test]
fn ingest_json_errors_on_missing_file() {
    let err = ingest_json_from_path("tests/fixtures/does_not_exist.json").unwrap_err();
    assert!(matches!(err, GridError::Io(_)));
}

#[test]
fn ingest_json_errors_on_non_table_value() {
    let err = ingest_json_from_str(r#""just a string""#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
}

#[test]
fn table_json_deserializes_without_the_loader() {
    let text = std::fs::read_to_string("tests/fixtures/orders.json").unwrap();
    let data: gridview_core::types::TableData = serde_json::from_str(&text).unwrap();
    assert_eq!(data, ingest_json_from_path("tests/fixtures/orders.json").unwrap());
}
