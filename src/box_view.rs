//! Box (card) view: a flat filter → sort → paginate pipeline over the same table data.
//!
//! Unlike the data table, the box view has no grouping, no totals and sorts by at most one
//! column, always ascending.

use serde::{Deserialize, Serialize};

use crate::columns::visible_column_names;
use crate::processing::{filter_rows, paginate_rows, sort_rows};
use crate::reader::CellReader;
use crate::types::{
    page_number_from_signed, page_size_from_signed, Filters, Row, SortObject, TableData,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxViewState {
    /// Column to sort by, ascending.
    pub sort_by: Option<String>,
    pub filter_enabled: bool,
    pub global_filter: String,
    pub pagination: bool,
    #[serde(deserialize_with = "page_size_from_signed")]
    pub page_size: usize,
    /// 1-based.
    #[serde(deserialize_with = "page_number_from_signed")]
    pub current_page: usize,
    /// 1-based index of a box to select automatically.
    pub select_box: Option<usize>,
}

impl Default for BoxViewState {
    fn default() -> Self {
        Self {
            sort_by: None,
            filter_enabled: false,
            global_filter: String::new(),
            pagination: false,
            page_size: 10,
            current_page: 1,
            select_box: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxViewOutput {
    /// Boxes to display, after pagination.
    pub rows: Vec<Row>,
    /// Rows left after filtering, before pagination.
    pub filtered_count: usize,
    pub auto_selected: Option<Row>,
}

pub fn run_box_pipeline(
    data: &TableData,
    state: &BoxViewState,
    reader: &CellReader,
) -> BoxViewOutput {
    let filtered = if state.filter_enabled && !state.global_filter.is_empty() {
        let visible = visible_column_names(&data.columns, &[]);
        filter_rows(&data.rows, &Filters::new(), &state.global_filter, &visible)
    } else {
        data.rows.clone()
    };
    let filtered_count = filtered.len();

    let sorted = match &state.sort_by {
        Some(column) if !column.is_empty() => {
            sort_rows(&filtered, &[SortObject::ascending(column.as_str())], reader)
        }
        _ => filtered,
    };

    let rows = if state.pagination {
        paginate_rows(&sorted, state.current_page, state.page_size)
    } else {
        sorted
    };

    let auto_selected = state
        .select_box
        .filter(|&n| n > 0)
        .and_then(|n| rows.get(n - 1).cloned());
    if let Some(n) = state.select_box.filter(|_| auto_selected.is_some()) {
        tracing::debug!(index = n, "box selected automatically");
    }

    BoxViewOutput {
        rows,
        filtered_count,
        auto_selected,
    }
}

#[cfg(test)]
mod tests {
    use super::{run_box_pipeline, BoxViewState};
    use crate::reader::CellReader;
    use crate::types::{Cell, Column, Row, TableData};

    fn sample_table() -> TableData {
        let row = |name: &str, note: &str| {
            Row::leaf([("NAME", Cell::text(name)), ("NOTE", Cell::text(note))])
        };
        TableData::new(
            vec![Column::new("NAME", "Name"), Column::new("NOTE", "Note").hidden()],
            vec![
                row("Mario", "red"),
                row("Anna", "blue"),
                row("Luca", "red"),
                row("Bruno", "green"),
            ],
        )
    }

    #[test]
    fn global_filter_needs_filter_enabled_and_skips_hidden_columns() {
        let data = sample_table();
        let mut state = BoxViewState {
            global_filter: "red".to_string(),
            ..Default::default()
        };
        assert_eq!(run_box_pipeline(&data, &state, &CellReader::default()).rows.len(), 4);

        state.filter_enabled = true;
        // "red" only appears in the hidden NOTE column.
        assert_eq!(run_box_pipeline(&data, &state, &CellReader::default()).filtered_count, 0);

        state.global_filter = "a".to_string();
        assert_eq!(run_box_pipeline(&data, &state, &CellReader::default()).filtered_count, 3);
    }

    #[test]
    fn sorts_ascending_then_paginates_and_auto_selects() {
        let state = BoxViewState {
            sort_by: Some("NAME".to_string()),
            pagination: true,
            page_size: 3,
            current_page: 2,
            select_box: Some(1),
            ..Default::default()
        };
        let out = run_box_pipeline(&sample_table(), &state, &CellReader::default());
        assert_eq!(out.rows.len(), 1);
        assert_eq!(out.rows[0].value("NAME"), "Mario");
        assert_eq!(out.auto_selected.unwrap().value("NAME"), "Mario");
    }

    #[test]
    fn negative_page_size_shows_every_box() {
        let state: BoxViewState =
            serde_json::from_str(r#"{"pagination": true, "pageSize": -3, "currentPage": -1}"#)
                .unwrap();
        let out = run_box_pipeline(&sample_table(), &state, &CellReader::default());
        assert_eq!(out.rows.len(), 4);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let state = BoxViewState {
            select_box: Some(5),
            ..Default::default()
        };
        let out = run_box_pipeline(&sample_table(), &state, &CellReader::default());
        assert!(out.auto_selected.is_none());
        assert_eq!(out.rows[0].value("NAME"), "Mario");
    }
}
