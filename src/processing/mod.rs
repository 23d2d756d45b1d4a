//! The row pipeline stages.
//!
//! Each stage is a pure function over borrowed input that returns freshly built rows:
//!
//! - [`filter_rows()`]: per-column and global substring filters
//! - [`calc_totals()`]: count/sum/average per column
//! - [`group_rows()`]: nested grouping with per-group totals
//! - [`sort_rows()`]: stable multi-key sort, recursive into groups
//! - [`paginate_rows()`]: page slicing
//!
//! [`crate::pipeline`] chains them in that order.
//!
//! ## Example: filter → totals → group → sort → paginate
//!
//! ```rust
//! use gridview_core::processing::{calc_totals, filter_rows, group_rows, paginate_rows, sort_rows};
//! use gridview_core::reader::CellReader;
//! use gridview_core::types::{
//!     Cell, Column, Filters, GroupObject, Row, SortObject, TotalMode, TotalsMap,
//! };
//!
//! let columns = vec![Column::new("city", "City"), Column::new("amount", "Amount")];
//! let rows = vec![
//!     Row::leaf([("city", Cell::text("Milano")), ("amount", Cell::number("10"))]),
//!     Row::leaf([("city", Cell::text("Brescia")), ("amount", Cell::number("20"))]),
//!     Row::leaf([("city", Cell::text("Milano")), ("amount", Cell::number("30"))]),
//! ];
//! let reader = CellReader::default();
//! let totals = TotalsMap::from([("amount".to_string(), TotalMode::Sum)]);
//!
//! let filtered = filter_rows(&rows, &Filters::new(), "", &["city", "amount"]);
//! let footer = calc_totals(&filtered, &totals, &reader);
//! assert_eq!(footer["amount"], 60.0);
//!
//! let grouped = group_rows(&columns, &filtered, &[GroupObject::new("city")], &totals, &reader);
//! let sorted = sort_rows(&grouped, &[SortObject::descending("amount")], &reader);
//! let page = paginate_rows(&sorted, 1, 10);
//!
//! let milano = page[0].group.as_ref().unwrap();
//! assert_eq!(milano.totals["amount"], 40.0);
//! assert_eq!(milano.children[0].value("amount"), "30");
//! ```

pub mod filter;
pub mod group;
pub mod paginate;
pub mod sort;
pub mod totals;

pub use filter::filter_rows;
pub use group::{group_id, group_rows};
pub use paginate::{page_count, page_range, paginate_rows};
pub use sort::sort_rows;
pub use totals::calc_totals;
