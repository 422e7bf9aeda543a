use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input path: {0} does not exist or is not a file/directory")]
    InvalidInputPath(PathBuf),

    #[error("Unsupported file format for: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Data processing error (Polars)")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("Spreadsheet error (calamine)")]
    Excel(#[from] calamine::Error),

    #[error("Failed to read or write JSON")]
    Json(#[from] serde_json::Error),

    #[error("Invalid chart selection")]
    Selection(#[from] SelectionError),
}

/// A user action on a chart session that cannot be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Column '{0}' not found in the data")]
    ColumnNotFound(String),

    #[error("Column '{0}' has no numeric values and cannot be used as a series")]
    NotNumeric(String),

    #[error("At least one series column must be selected")]
    EmptySeries,

    #[error("The result has fewer than two columns; there are no axes to select")]
    NoAxes,
}
