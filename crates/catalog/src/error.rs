//! Error types for the catalog crate.
//!
//! Only catalog construction can fail. Once a `Catalog` exists every
//! lookup is infallible and reports missing data as an empty result.

use thiserror::Error;

/// Errors that can occur while loading or building a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the file (bad quoting, wrong header, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Line in a catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// File extension is neither `.csv` nor `.dat`
    #[error("Unsupported catalog format: {path}")]
    UnsupportedFormat { path: String },

    /// Two records share the same id
    #[error("Duplicate movie id: {id}")]
    DuplicateId { id: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
