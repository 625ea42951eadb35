//! Data store error types
//!
//! Defines all errors that can occur while loading the launch table.

use thiserror::Error;

/// Errors that can occur while loading launch records
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The CSV file is missing or unreadable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV record could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A cell holds a value outside its column's domain
    #[error("Invalid value {value:?} in column '{column}' at line {line}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },

    /// The file has a header but no data rows
    #[error("CSV contains no launch records")]
    Empty,
}

/// Result type alias for data store operations
pub type DataResult<T> = Result<T, DataLoadError>;
