//! Dataset error types
//!
//! Everything here is fatal at startup: the process refuses to start
//! without a well-formed launch CSV.

use thiserror::Error;

/// Errors that can occur while loading the launch dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O operation failed (missing or unreadable CSV)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed
    #[error("CSV error at line {line}: {message}")]
    Csv { line: u64, message: String },

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The CSV contains a site named like the dropdown sentinel
    #[error("Site name {0:?} is reserved for the all-sites option")]
    ReservedSiteName(String),
}

/// Result type for dataset operations
pub type DataResult<T> = Result<T, DataError>;
