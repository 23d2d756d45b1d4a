//! Pipeline orchestration: filter → totals → group → sort → paginate.
//!
//! [`run_pipeline`] is the pure entry point: given [`TableData`] and a [`TableState`] it builds
//! the whole view model from scratch. [`DataTable`] wraps it for interactive use, holding the
//! tracked inputs plus UI state (group expansion, selection) and recomputing on every change.
//!
//! Nothing is cached between runs; each run is proportional to the row count and finishes
//! before the call returns.

mod expansion;
mod observer;
mod table;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::columns::visible_column_names;
use crate::processing::{calc_totals, filter_rows, group_rows, page_count, paginate_rows, sort_rows};
use crate::reader::CellReader;
use crate::types::{
    page_number_from_signed, page_size_from_signed, Filters, GroupObject, Row, SortObject,
    TableData, Totals, TotalsMap,
};

pub use expansion::{rendered_row_count, GroupExpansion};
pub use observer::{
    CompositeObserver, LogObserver, PipelineEvent, PipelineObserver, PipelineStage, PipelineStats,
};
pub use table::DataTable;

/// The tracked pipeline inputs besides the data itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableState {
    pub filters: Filters,
    pub global_filter: String,
    pub sort: Vec<SortObject>,
    pub groups: Vec<GroupObject>,
    pub totals: TotalsMap,
    /// 1-based.
    #[serde(deserialize_with = "page_number_from_signed")]
    pub current_page: usize,
    /// `0` disables pagination.
    #[serde(deserialize_with = "page_size_from_signed")]
    pub rows_per_page: usize,
    /// Expand every group that has no stored expansion state.
    pub expand_groups: bool,
    /// Display flag passed through to the renderer untouched.
    pub force_one_line: bool,
    /// 1-based index of a row to select automatically after grouping.
    pub select_row: Option<usize>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filters: Filters::new(),
            global_filter: String::new(),
            sort: Vec::new(),
            groups: Vec::new(),
            totals: TotalsMap::new(),
            current_page: 1,
            rows_per_page: 10,
            expand_groups: false,
            force_one_line: true,
            select_row: None,
        }
    }
}

/// The view model produced by one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    /// Filtered, grouped and sorted rows before pagination.
    pub rows: Vec<Row>,
    pub paginated_rows: Vec<Row>,
    /// Table-wide totals over the filtered leaf rows.
    pub footer: Totals,
    pub rendered_row_count: usize,
    /// The page actually shown, after clamping.
    pub current_page: usize,
    pub page_count: usize,
    pub auto_selected: Option<Row>,
    pub force_one_line: bool,
    pub stats: PipelineStats,
}

/// Run the full pipeline with fresh group expansion state.
///
/// Groups are expanded iff `state.expand_groups` is set.
pub fn run_pipeline(data: &TableData, state: &TableState, reader: &CellReader) -> PipelineOutput {
    let mut expansion = GroupExpansion::new();
    compute(data, state, reader, &mut expansion, &mut |_| {})
}

/// Run the full pipeline, restoring and recording group expansion in `expansion`.
pub fn run_pipeline_with_expansion(
    data: &TableData,
    state: &TableState,
    reader: &CellReader,
    expansion: &mut GroupExpansion,
) -> PipelineOutput {
    compute(data, state, reader, expansion, &mut |_| {})
}

pub(crate) fn compute(
    data: &TableData,
    state: &TableState,
    reader: &CellReader,
    expansion: &mut GroupExpansion,
    emit: &mut dyn FnMut(PipelineEvent),
) -> PipelineOutput {
    let start = Instant::now();
    emit(PipelineEvent::RunStarted {
        input_rows: data.rows.len(),
    });

    let visible = visible_column_names(&data.columns, &state.groups);
    let filtered = filter_rows(&data.rows, &state.filters, &state.global_filter, &visible);
    emit(PipelineEvent::StageFinished {
        stage: PipelineStage::Filter,
        rows: filtered.len(),
    });

    let footer = calc_totals(&filtered, &state.totals, reader);
    emit(PipelineEvent::StageFinished {
        stage: PipelineStage::Totals,
        rows: filtered.len(),
    });

    let mut grouped = group_rows(&data.columns, &filtered, &state.groups, &state.totals, reader);
    emit(PipelineEvent::StageFinished {
        stage: PipelineStage::Group,
        rows: grouped.len(),
    });

    // Post-grouping directives: expansion, then automatic selection.
    expansion.apply(&mut grouped, state.expand_groups);
    let auto_selected = state
        .select_row
        .filter(|&n| n > 0)
        .and_then(|n| grouped.get(n - 1).map(|row| (n, row.clone())))
        .map(|(n, row)| {
            emit(PipelineEvent::AutoSelected { index: n });
            row
        });

    let sorted = sort_rows(&grouped, &state.sort, reader);
    emit(PipelineEvent::StageFinished {
        stage: PipelineStage::Sort,
        rows: sorted.len(),
    });

    let pages = page_count(sorted.len(), state.rows_per_page);
    let requested = state.current_page.max(1);
    let current_page = if pages > 0 && requested > pages { 1 } else { requested };
    if current_page != state.current_page {
        emit(PipelineEvent::PageReset {
            from: state.current_page,
            to: current_page,
        });
    }
    let paginated_rows = paginate_rows(&sorted, current_page, state.rows_per_page);
    emit(PipelineEvent::StageFinished {
        stage: PipelineStage::Paginate,
        rows: paginated_rows.len(),
    });

    let stats = PipelineStats {
        input_rows: data.rows.len(),
        filtered_rows: filtered.len(),
        group_rows: count_groups(&sorted),
        page_rows: paginated_rows.len(),
        rendered_rows: rendered_row_count(&paginated_rows),
    };
    emit(PipelineEvent::RunFinished {
        elapsed: start.elapsed(),
        stats,
    });

    PipelineOutput {
        rendered_row_count: stats.rendered_rows,
        rows: sorted,
        paginated_rows,
        footer,
        current_page,
        page_count: pages,
        auto_selected,
        force_one_line: state.force_one_line,
        stats,
    }
}

fn count_groups(rows: &[Row]) -> usize {
    rows.iter()
        .filter_map(|row| row.group.as_ref())
        .map(|g| 1 + count_groups(&g.children))
        .sum()
}
