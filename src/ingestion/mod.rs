//! Loading [`crate::types::TableData`] from table JSON.
//!
//! The pipeline takes `TableData` values directly; this module only exists for hosts (and
//! tests) that keep tables as JSON text or files.

pub mod json;

pub use json::{ingest_json_from_path, ingest_json_from_str};
