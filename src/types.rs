//! Core data model for grid tables.
//!
//! A [`TableData`] is an ordered list of [`Column`]s plus [`Row`]s whose [`Cell`]s are keyed by
//! column name. Rows are either *leaf* rows (real data) or *group* rows (synthetic buckets built
//! by [`crate::processing::group_rows`]) carrying a [`GroupInfo`].
//!
//! Every type here serializes with the camelCase field names used by the widget props, so a
//! host can hand table JSON straight to [`crate::ingestion::json::ingest_json_from_str`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-column substring filters, keyed by column name.
pub type Filters = BTreeMap<String, String>;

/// Aggregation requested for each column, keyed by column name.
pub type TotalsMap = BTreeMap<String, TotalMode>;

/// Computed aggregates keyed by column name.
pub type Totals = BTreeMap<String, f64>;

/// A table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique key; cells are looked up by this name.
    pub name: String,
    /// Display label.
    #[serde(default)]
    pub title: String,
    /// Preferred width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Hidden columns are skipped by the global filter.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Suppress a cell value equal to the one in the previous sibling row.
    #[serde(default)]
    pub hide_values_repetitions: bool,
}

impl Column {
    /// Create a visible column.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            size: None,
            visible: true,
            hide_values_repetitions: false,
        }
    }

    /// Builder-style visibility toggle.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

fn default_true() -> bool {
    true
}

/// Reads a page size that hosts may send as any integer; `<= 0` means no pagination.
pub(crate) fn page_size_from_signed<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw).unwrap_or(0))
}

/// Reads a 1-based page number; `<= 0` is page `1`.
pub(crate) fn page_number_from_signed<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw).unwrap_or(0).max(1))
}

/// Structured type tag of a cell: `t` (type), `p` (sub-type), `k` (raw key value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CellObj {
    pub t: String,
    pub p: String,
    pub k: String,
}

impl CellObj {
    pub fn new(t: impl Into<String>, p: impl Into<String>, k: impl Into<String>) -> Self {
        Self {
            t: t.into(),
            p: p.into(),
            k: k.into(),
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    pub obj: CellObj,
    /// Displayable value; filtering and plain-text sorting use this.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BTreeMap<String, String>>,
    /// Whether the cell exposes an options menu.
    pub options: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

impl Cell {
    /// Create a cell from its tag and display value.
    pub fn new(obj: CellObj, value: impl Into<String>) -> Self {
        Self {
            obj,
            value: value.into(),
            ..Default::default()
        }
    }

    /// A cell with no type tag.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(CellObj::default(), value)
    }

    /// A numeric (`NR`) cell whose raw key equals its display value.
    pub fn number(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(CellObj::new("NR", "", value.clone()), value)
    }
}

/// An action offered on a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
    pub text: String,
    #[serde(default)]
    pub icon: String,
}

/// Synthetic grouping node data, present only on group rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    /// Derived from the grouping path; stable across re-groupings of refreshed data.
    pub id: String,
    /// Id of the enclosing group. Resolve it with [`find_group`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Grouping column name.
    pub column: String,
    pub expanded: bool,
    /// The grouping value shared by every descendant leaf.
    pub label: String,
    /// Tag of the grouping cell (taken from the first leaf of the bucket).
    #[serde(default)]
    pub obj: CellObj,
    /// Never empty: empty buckets are not materialized.
    pub children: Vec<Row>,
    /// Aggregates over all descendant leaves, restricted to the requested totals.
    #[serde(default)]
    pub totals: Totals,
}

impl GroupInfo {
    /// Clone everything but the children, which are replaced.
    pub fn with_children(&self, children: Vec<Row>) -> Self {
        Self {
            id: self.id.clone(),
            parent_id: self.parent_id.clone(),
            column: self.column.clone(),
            expanded: self.expanded,
            label: self.label.clone(),
            obj: self.obj.clone(),
            children,
            totals: self.totals.clone(),
        }
    }
}

/// A table row: a leaf (`group == None`) or a group row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: BTreeMap<String, Cell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RowAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupInfo>,
}

impl Row {
    /// Create a leaf row from `(column, cell)` pairs.
    pub fn leaf<K, I>(cells: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Cell)>,
    {
        Self {
            cells: cells.into_iter().map(|(k, c)| (k.into(), c)).collect(),
            ..Default::default()
        }
    }

    /// Create a group row.
    pub fn group(group: GroupInfo) -> Self {
        Self {
            group: Some(group),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_group(&self) -> bool {
        self.group.is_some()
    }

    pub fn cell(&self, column: &str) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Display value of `column`, or `""` when the row has no such cell.
    pub fn value(&self, column: &str) -> &str {
        self.cells.get(column).map(|c| c.value.as_str()).unwrap_or("")
    }

    /// Number of leaf rows at or below this row.
    pub fn leaf_count(&self) -> usize {
        match &self.group {
            Some(g) => g.children.iter().map(Row::leaf_count).sum(),
            None => 1,
        }
    }
}

/// Visit every leaf row in `rows`, descending into group children in order.
pub fn for_each_leaf<'a>(rows: &'a [Row], f: &mut impl FnMut(&'a Row)) {
    for row in rows {
        match &row.group {
            Some(g) => for_each_leaf(&g.children, f),
            None => f(row),
        }
    }
}

/// Find a group row anywhere in the tree by its [`GroupInfo::id`].
pub fn find_group<'a>(rows: &'a [Row], id: &str) -> Option<&'a Row> {
    rows.iter().find_map(|row| {
        let group = row.group.as_ref()?;
        if group.id == id {
            Some(row)
        } else {
            find_group(&group.children, id)
        }
    })
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    #[serde(rename = "A", alias = "Ascending")]
    Ascending,
    #[serde(rename = "D", alias = "Descending")]
    Descending,
}

impl SortMode {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One key of a multi-column sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortObject {
    pub column: String,
    pub sort_mode: SortMode,
}

impl SortObject {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            sort_mode: SortMode::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            sort_mode: SortMode::Descending,
        }
    }
}

/// One level of grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupObject {
    pub column: String,
    /// When false the grouped column is hidden from the visible column set.
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl GroupObject {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            visible: true,
        }
    }
}

/// Aggregation kind for totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalMode {
    Count,
    Sum,
    #[serde(alias = "Avarage")]
    Average,
}

/// Tabular input: columns plus rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableData {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}
