//! Filter specifications.
//!
//! A `GridFilterValue` is the tagged union stored per field in a filter set.
//! The tag alone decides which predicate runs: a `Range` never also behaves
//! like a `Match`, even though both carry a `filter` bound.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The discriminant of a [`GridFilterValue`], serialized the same way
/// the `type` property is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GridFilterType {
    /// Substring/equality on a single value
    Match,
    /// Inclusive lower/upper bounds
    Range,
    /// Membership in a set of values
    ValueSet,
}

impl fmt::Display for GridFilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            GridFilterType::Match => "match",
            GridFilterType::Range => "range",
            GridFilterType::ValueSet => "valueSet",
        };
        f.write_str(tag)
    }
}

/// How a field value is compared by a `Match` specification.
///
/// Strings match by case-sensitive substring, numbers by equality.
pub trait FieldValue: PartialOrd {
    fn matches(&self, filter: &Self) -> bool;
}

impl FieldValue for String {
    fn matches(&self, filter: &Self) -> bool {
        self.contains(filter.as_str())
    }
}

impl FieldValue for i32 {
    fn matches(&self, filter: &Self) -> bool {
        self == filter
    }
}

impl FieldValue for f64 {
    fn matches(&self, filter: &Self) -> bool {
        self == filter
    }
}

/// A single filter specification.
///
/// Serialized in the grid's JSON shape:
/// ```json
/// { "type": "match", "filter": "Dune" }
/// { "type": "range", "filter": 2022, "filterTo": 2025 }
/// { "type": "valueSet", "values": ["Oscar"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GridFilterValue<T> {
    Match {
        filter: T,
    },
    Range {
        filter: T,
        #[serde(rename = "filterTo")]
        filter_to: T,
    },
    ValueSet {
        values: Vec<T>,
    },
}

impl<T> GridFilterValue<T> {
    pub fn matching(filter: T) -> Self {
        GridFilterValue::Match { filter }
    }

    /// Inclusive range `[filter, filter_to]`
    pub fn range(filter: T, filter_to: T) -> Self {
        GridFilterValue::Range { filter, filter_to }
    }

    pub fn value_set(values: impl IntoIterator<Item = T>) -> Self {
        GridFilterValue::ValueSet {
            values: values.into_iter().collect(),
        }
    }

    /// A specification no value can satisfy (an empty value set)
    pub fn nothing() -> Self {
        GridFilterValue::ValueSet { values: Vec::new() }
    }

    pub fn filter_type(&self) -> GridFilterType {
        match self {
            GridFilterValue::Match { .. } => GridFilterType::Match,
            GridFilterValue::Range { .. } => GridFilterType::Range,
            GridFilterValue::ValueSet { .. } => GridFilterType::ValueSet,
        }
    }
}

impl<T: FieldValue> GridFilterValue<T> {
    /// Evaluate against a single-valued field.
    ///
    /// Every tag is honoured on every field: a `Match` on a numeric field
    /// is an equality test, so `{ "year": { "type": "match", "filter": 2021 } }`
    /// keeps only 2021 movies rather than being ignored.
    pub fn test(&self, value: &T) -> bool {
        match self {
            GridFilterValue::Match { filter } => value.matches(filter),
            GridFilterValue::Range { filter, filter_to } => filter <= value && value <= filter_to,
            GridFilterValue::ValueSet { values } => values.iter().any(|v| v == value),
        }
    }

    /// Evaluate against a multi-valued field: true if any element passes.
    ///
    /// For `ValueSet` this is a non-empty intersection check.
    pub fn test_any(&self, values: &[T]) -> bool {
        values.iter().any(|value| self.test(value))
    }
}
