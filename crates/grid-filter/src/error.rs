//! Error types for resolving untyped filter input.
//!
//! Evaluating a typed filter never fails; only turning raw JSON into a
//! typed filter set can.

use crate::value::GridFilterType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// A numeric field received a value that does not parse as a number
    #[error("Invalid number for {field}.{property}: {value}")]
    InvalidNumber {
        field: String,
        property: &'static str,
        value: String,
    },

    /// The filter's tag requires a property that is absent
    #[error("Missing property '{property}' for {filter_type} filter on {field}")]
    MissingProperty {
        field: String,
        filter_type: GridFilterType,
        property: &'static str,
    },

    /// A value of the wrong JSON kind (e.g. an object where text is expected)
    #[error("Unexpected value for {field}: {value}")]
    UnexpectedType { field: String, value: String },

    #[error("Unknown filter field: {0}")]
    UnknownField(String),

    #[error("Invalid filter document: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
