//! Error types for the catalog crate.
//!
//! Two families live here:
//! - `CatalogError` for loading and validating a catalog file
//! - `QueryError` for rejecting user input before any lookup runs

use thiserror::Error;

/// Errors that can occur while loading and validating a movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two entries share a title (case-insensitive)
    #[error("Duplicate title in catalog: {title}")]
    DuplicateTitle { title: String },

    /// Catalog validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Input rejected before any lookup is issued.
///
/// The messages are shown to end users verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Movie title cannot be empty.")]
    EmptyTitle,

    #[error("Query must be at least {min} characters long.")]
    QueryTooShort { min: usize },
}
