//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A table object: `{"columns": [...], "rows": [...]}` (either key may be omitted)
//! - A bare array of rows: `[{"cells": {...}}, ...]`; columns are derived from the cell names
//!   in first-seen order

use std::fs;
use std::path::Path;

use crate::error::{GridError, GridResult};
use crate::types::{Column, Row, TableData};

/// Ingest a JSON file into [`TableData`].
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> GridResult<TableData> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest JSON from an in-memory string into [`TableData`].
pub fn ingest_json_from_str(input: &str) -> GridResult<TableData> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GridError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    match serde_json::from_str::<serde_json::Value>(trimmed)? {
        v @ serde_json::Value::Object(_) => Ok(serde_json::from_value::<TableData>(v)?),
        v @ serde_json::Value::Array(_) => {
            let rows: Vec<Row> = serde_json::from_value(v)?;
            Ok(TableData::new(derive_columns(&rows), rows))
        }
        _ => Err(GridError::SchemaMismatch {
            message: "json must be a table object or an array of rows".to_string(),
        }),
    }
}

fn derive_columns(rows: &[Row]) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    for row in rows {
        for name in row.cells.keys() {
            if !columns.iter().any(|c| &c.name == name) {
                columns.push(Column::new(name.as_str(), name.as_str()));
            }
        }
    }
    columns
}
