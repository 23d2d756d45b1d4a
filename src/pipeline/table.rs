use std::fmt;
use std::sync::Arc;

use crate::reader::CellReader;
use crate::types::{GroupObject, Row, SortMode, SortObject, TableData, TotalsMap};

use super::{compute, GroupExpansion, PipelineEvent, PipelineObserver, PipelineOutput, TableState};

/// An interactive table: tracked inputs plus UI state, recomputed on every change.
///
/// Every setter re-runs the full pipeline before returning, so [`DataTable::output`] always
/// reflects the current inputs.
///
/// ```rust
/// use gridview_core::pipeline::DataTable;
/// use gridview_core::types::{Cell, Column, Row, TableData};
///
/// let data = TableData::new(
///     vec![Column::new("city", "City")],
///     vec![
///         Row::leaf([("city", Cell::text("Milano"))]),
///         Row::leaf([("city", Cell::text("Brescia"))]),
///     ],
/// );
/// let mut table = DataTable::new(data);
/// table.toggle_group_column("city");
/// assert_eq!(table.output().rendered_row_count, 2);
///
/// table.set_expand_groups(true);
/// assert_eq!(table.output().rendered_row_count, 4);
/// ```
pub struct DataTable {
    data: TableData,
    state: TableState,
    reader: CellReader,
    expansion: GroupExpansion,
    selected: Vec<Row>,
    multi_selection: bool,
    observer: Option<Arc<dyn PipelineObserver>>,
    output: PipelineOutput,
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.data.rows.len())
            .field("state", &self.state)
            .field("expansion_len", &self.expansion.len())
            .field("selected_len", &self.selected.len())
            .field("multi_selection", &self.multi_selection)
            .field("observer_set", &self.observer.is_some())
            .field("stats", &self.output.stats)
            .finish()
    }
}

impl DataTable {
    pub fn new(data: TableData) -> Self {
        let mut table = Self {
            data,
            state: TableState::default(),
            reader: CellReader::default(),
            expansion: GroupExpansion::new(),
            selected: Vec::new(),
            multi_selection: false,
            observer: None,
            output: PipelineOutput::default(),
        };
        table.refresh();
        table
    }

    pub fn with_state(mut self, state: TableState) -> Self {
        self.state = state;
        self.expansion.clear();
        self.refresh();
        self.apply_auto_selection();
        self
    }

    pub fn with_reader(mut self, reader: CellReader) -> Self {
        self.reader = reader;
        self.refresh();
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_multi_selection(mut self, multi_selection: bool) -> Self {
        self.multi_selection = multi_selection;
        self
    }

    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn reader(&self) -> &CellReader {
        &self.reader
    }

    pub fn output(&self) -> &PipelineOutput {
        &self.output
    }

    /// Rows on the current page.
    pub fn rows(&self) -> &[Row] {
        &self.output.paginated_rows
    }

    pub fn selected(&self) -> &[Row] {
        &self.selected
    }

    pub fn expansion(&self) -> &GroupExpansion {
        &self.expansion
    }

    /// Replace the data. Expansion state is kept; the selection is dropped.
    pub fn set_data(&mut self, data: TableData) {
        self.data = data;
        self.selected.clear();
        self.refresh();
    }

    /// Set or, with an empty value, remove a column filter. Returns to the first page.
    pub fn set_filter(&mut self, column: &str, value: &str) {
        if value.is_empty() {
            self.state.filters.remove(column);
        } else {
            self.state.filters.insert(column.to_string(), value.to_string());
        }
        self.state.current_page = 1;
        self.refresh();
    }

    /// Returns to the first page.
    pub fn set_global_filter(&mut self, value: &str) {
        self.state.global_filter = value.to_string();
        self.state.current_page = 1;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: Vec<SortObject>) {
        self.state.sort = sort;
        self.refresh();
    }

    /// Column header click.
    ///
    /// An already sorted column flips its mode. Otherwise the column is sorted ascending. With
    /// `multi` the other sort keys are kept, without it they are dropped.
    pub fn toggle_sort(&mut self, column: &str, multi: bool) {
        let key = match self.state.sort.iter().position(|s| s.column == column) {
            Some(i) => {
                let flipped = SortObject {
                    column: column.to_string(),
                    sort_mode: self.state.sort[i].sort_mode.flipped(),
                };
                if multi {
                    self.state.sort[i] = flipped;
                    self.refresh();
                    return;
                }
                flipped
            }
            None => SortObject {
                column: column.to_string(),
                sort_mode: SortMode::Ascending,
            },
        };
        if multi {
            self.state.sort.push(key);
        } else {
            self.state.sort = vec![key];
        }
        self.refresh();
    }

    pub fn set_groups(&mut self, groups: Vec<GroupObject>) {
        self.state.groups = groups;
        self.expansion.clear();
        self.refresh();
    }

    /// Group by `column`, or stop grouping by it if it is already grouped.
    pub fn toggle_group_column(&mut self, column: &str) {
        match self.state.groups.iter().position(|g| g.column == column) {
            Some(i) => {
                self.state.groups.remove(i);
            }
            None => self.state.groups.push(GroupObject::new(column)),
        }
        self.expansion.clear();
        self.refresh();
    }

    pub fn remove_group(&mut self, column: &str) {
        let before = self.state.groups.len();
        self.state.groups.retain(|g| g.column != column);
        if self.state.groups.len() != before {
            self.expansion.clear();
            self.refresh();
        }
    }

    pub fn set_totals(&mut self, totals: TotalsMap) {
        self.state.totals = totals;
        self.refresh();
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.state.current_page = page.max(1);
        self.refresh();
    }

    /// Change the page size; a current page past the new last page falls back to page 1.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.state.rows_per_page = rows_per_page;
        self.refresh();
    }

    /// Force every group open or closed, forgetting per-group state.
    pub fn set_expand_groups(&mut self, expand: bool) {
        self.state.expand_groups = expand;
        self.expansion.clear();
        self.refresh();
    }

    /// Flip one group. Returns its new state, or `None` when no such group exists.
    pub fn toggle_group_expanded(&mut self, id: &str) -> Option<bool> {
        let expanded = self.expansion.toggle(id)?;
        self.refresh();
        Some(expanded)
    }

    /// Select the 1-based `row` of the grouped rows, when in range.
    pub fn set_select_row(&mut self, row: Option<usize>) {
        self.state.select_row = row;
        self.refresh();
        self.apply_auto_selection();
    }

    /// Click on the `index`-th row of the current page.
    ///
    /// With multi-selection enabled and `additive` set, the row is toggled in the selection;
    /// otherwise it becomes the only selected row. Returns `false` for an out-of-range index.
    pub fn select(&mut self, index: usize, additive: bool) -> bool {
        let Some(row) = self.output.paginated_rows.get(index).cloned() else {
            return false;
        };
        if self.multi_selection && additive {
            match self.selected.iter().position(|r| *r == row) {
                Some(i) => {
                    self.selected.remove(i);
                }
                None => self.selected.push(row),
            }
        } else {
            self.selected = vec![row];
        }
        true
    }

    /// Select every row on the current page.
    pub fn select_all(&mut self) {
        self.selected = self.output.paginated_rows.clone();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    fn apply_auto_selection(&mut self) {
        if let Some(row) = &self.output.auto_selected {
            self.selected = vec![row.clone()];
        }
    }

    fn refresh(&mut self) {
        let observer = self.observer.clone();
        let mut emit = |event: PipelineEvent| {
            if let Some(o) = &observer {
                o.on_event(&event);
            }
        };
        self.output = compute(
            &self.data,
            &self.state,
            &self.reader,
            &mut self.expansion,
            &mut emit,
        );
        self.state.current_page = self.output.current_page;
    }
}
