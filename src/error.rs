use thiserror::Error;

/// Convenience result type for fallible (I/O boundary) operations.
pub type GridResult<T> = Result<T, GridError>;

/// Error type returned when loading table JSON.
///
/// The row pipeline itself never fails; degenerate input is resolved locally. Errors only
/// come from reading table data out of files or strings.
#[derive(Debug, Error)]
pub enum GridError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed table JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON that is not a table (empty input, a scalar, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}
