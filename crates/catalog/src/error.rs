//! Error types for the catalog crate.
//!
//! Loading is the only fallible operation here: the record store and the
//! data model themselves never fail.

use thiserror::Error;

/// Errors that can occur while loading a catalog document
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid catalog JSON
    ///
    /// serde_json reports line and column, so no extra context is stored
    #[error("Invalid catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
