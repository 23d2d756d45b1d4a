//! `gridview-core` is the row pipeline behind data-grid widgets: given a table of typed cells
//! and the user's view state, it produces the rows a grid should display.
//!
//! The primary entrypoint is [`pipeline::run_pipeline`] (or the stateful
//! [`pipeline::DataTable`]), which chains the stages in a fixed order:
//!
//! 1. **filter**: per-column and global substring filters ([`processing::filter_rows`])
//! 2. **totals**: count/sum/average footer over filtered leaves ([`processing::calc_totals`])
//! 3. **group**: nested group rows with per-group totals ([`processing::group_rows`])
//! 4. **sort**: stable multi-key sort, recursive into groups ([`processing::sort_rows`])
//! 5. **paginate**: page slicing with out-of-range page reset ([`processing::paginate_rows`])
//!
//! Cells carry a structured type tag ([`types::CellObj`]); [`classify`] maps tags to semantic
//! kinds and [`reader::CellReader`] extracts numbers for totals and sorting.
//!
//! ## Quick example
//!
//! ```rust
//! use gridview_core::pipeline::{run_pipeline, TableState};
//! use gridview_core::reader::CellReader;
//! use gridview_core::types::{Cell, Column, GroupObject, Row, TableData, TotalMode, TotalsMap};
//!
//! let data = TableData::new(
//!     vec![Column::new("city", "City"), Column::new("amount", "Amount")],
//!     vec![
//!         Row::leaf([("city", Cell::text("Milano")), ("amount", Cell::number("100.60"))]),
//!         Row::leaf([("city", Cell::text("Brescia")), ("amount", Cell::number("145.22"))]),
//!         Row::leaf([("city", Cell::text("Milano")), ("amount", Cell::number("221.23"))]),
//!     ],
//! );
//! let state = TableState {
//!     groups: vec![GroupObject::new("city")],
//!     totals: TotalsMap::from([("amount".to_string(), TotalMode::Sum)]),
//!     ..Default::default()
//! };
//!
//! let out = run_pipeline(&data, &state, &CellReader::default());
//! assert_eq!(out.paginated_rows.len(), 2);
//! assert!((out.footer["amount"] - 467.05).abs() < 1e-9);
//! ```
//!
//! ## Loading data
//!
//! [`types::TableData`] deserializes from table JSON (`{columns, rows}`);
//! [`ingestion::ingest_json_from_path`] also accepts a bare array of rows:
//!
//! ```no_run
//! use gridview_core::ingestion::ingest_json_from_path;
//!
//! # fn main() -> Result<(), gridview_core::GridError> {
//! let data = ingest_json_from_path("orders.json")?;
//! println!("rows={}", data.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: table, row, cell and view-state model types
//! - [`classify`]: cell tag → semantic kind table
//! - [`reader`]: number extraction and locale handling
//! - [`processing`]: the individual pipeline stages
//! - [`pipeline`]: orchestration, group expansion and the stateful [`pipeline::DataTable`]
//! - [`columns`]: visible columns, reordering, repeated-value hiding
//! - [`paginator`], [`load_more`]: pager and "load more" control models
//! - [`box_view`]: the flat card-view pipeline
//! - [`tree`]: tree view nodes and expansion
//! - [`ingestion`]: loading table data from JSON
//! - [`error`]: error types

pub mod box_view;
pub mod classify;
pub mod columns;
pub mod error;
pub mod ingestion;
pub mod load_more;
pub mod paginator;
pub mod pipeline;
pub mod processing;
pub mod reader;
pub mod tree;
pub mod types;

pub use error::{GridError, GridResult};
