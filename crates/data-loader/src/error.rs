//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading and validating the ratings dataset.
///
/// A load error is fatal for every downstream view: the dataset is read
/// once at startup and shared read-only afterwards.
#[derive(Error, Debug)]
pub enum DataError {
    /// File could not be found at the given path
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level error (malformed quoting, inconsistent field counts, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Required column '{column}' is missing from the input file")]
    MissingColumn { column: &'static str },

    /// A row couldn't be deserialized into a rating record
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataError>;
