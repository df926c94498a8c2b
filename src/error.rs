//! Error type shared by the sheet model, renderers and readers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building, reading or rendering sheets.
#[derive(Debug, Error)]
pub enum Error {
    #[error("row index {index} is out of range for a sheet with {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    #[error("column index {index} is out of range for a sheet with {len} columns")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("book already contains a sheet named `{0}`")]
    DuplicateSheetName(String),

    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    /// The destination path has no extension to pick a format from.
    #[error("cannot infer a format for `{}`: no file extension", .0.display())]
    MissingExtension(PathBuf),

    /// An empty cell cannot be represented in JSON output.
    ///
    /// `row` and `column` are zero-based positions in the flattened rows,
    /// header row included.
    #[error("sheet `{sheet}` has an empty cell at row {row}, column {column}")]
    EmptyCell {
        sheet: String,
        row: usize,
        column: usize,
    },

    #[error("sheet `{sheet}` has a non-finite number at row {row}, column {column}")]
    NonFiniteNumber {
        sheet: String,
        row: usize,
        column: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
