//! Resolving untyped filter input into typed filter sets.
//!
//! Filters arriving from JSON (the CLI, a UI) carry their bounds as
//! arbitrary values: `"2022"`, `2022` and `"soon"` all show up in practice.
//! [`NumericPolicy`] decides what an unparseable number does to the query.

use crate::error::{FilterError, Result};
use crate::filters::{CategoryFilters, MovieFilters};
use crate::value::{GridFilterType, GridFilterValue};
use catalog::Year;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// What to do with a numeric bound that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumericPolicy {
    /// Fail the whole query with [`FilterError::InvalidNumber`]
    Reject,
    /// Keep the filter but let it match nothing
    #[default]
    Exclude,
    /// Drop the bad bound: a range side becomes open, a bad value-set
    /// element is skipped, and a bad match resolves to no entry at all, so
    /// merging it leaves the field's current entry unchanged
    Coerce,
}

/// A filter specification whose properties have not been typed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFilterValue {
    #[serde(rename = "type")]
    pub filter_type: GridFilterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(default, rename = "filterTo", skip_serializing_if = "Option::is_none")]
    pub filter_to: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
}

/// Numeric field types a raw value can be resolved into.
pub trait NumericField: Copy {
    const LOWEST: Self;
    const HIGHEST: Self;

    /// Parse a JSON number or numeric string; `None` if it is neither.
    fn from_json(value: &Value) -> Option<Self>;
}

impl NumericField for i32 {
    const LOWEST: Self = i32::MIN;
    const HIGHEST: Self = i32::MAX;

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .and_then(|v| i32::try_from(v).ok()),
            Value::String(s) => {
                let s = s.trim();
                s.parse().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.fract() == 0.0)
                        .and_then(|f| i32::try_from(f as i64).ok())
                })
            }
            _ => None,
        }
    }
}

impl NumericField for f64 {
    const LOWEST: Self = f64::NEG_INFINITY;
    const HIGHEST: Self = f64::INFINITY;

    fn from_json(value: &Value) -> Option<Self> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|v| !v.is_nan())
    }
}

/// Outcome of an unparseable number under a non-rejecting policy
enum Fallback {
    MatchNothing,
    Unbounded,
}

fn invalid_number(
    policy: NumericPolicy,
    field: &str,
    property: &'static str,
    raw: &Value,
) -> Result<Fallback> {
    match policy {
        NumericPolicy::Reject => Err(FilterError::InvalidNumber {
            field: field.to_string(),
            property,
            value: raw.to_string(),
        }),
        NumericPolicy::Exclude => {
            warn!("Invalid number for {}.{}: {}, excluding all records", field, property, raw);
            Ok(Fallback::MatchNothing)
        }
        NumericPolicy::Coerce => {
            warn!("Invalid number for {}.{}: {}, ignoring bound", field, property, raw);
            Ok(Fallback::Unbounded)
        }
    }
}

fn text(field: &str, raw: &Value) -> Result<String> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(FilterError::UnexpectedType {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

impl RawFilterValue {
    fn require<'a, T>(&self, field: &str, property: &'static str, value: Option<&'a T>) -> Result<&'a T> {
        value.ok_or_else(|| FilterError::MissingProperty {
            field: field.to_string(),
            filter_type: self.filter_type,
            property,
        })
    }

    /// Resolve into a specification over a text field.
    pub fn resolve_text(&self, field: &str) -> Result<GridFilterValue<String>> {
        match self.filter_type {
            GridFilterType::Match => {
                let filter = self.require(field, "filter", self.filter.as_ref())?;
                Ok(GridFilterValue::matching(text(field, filter)?))
            }
            GridFilterType::Range => {
                let filter = self.require(field, "filter", self.filter.as_ref())?;
                let filter_to = self.require(field, "filterTo", self.filter_to.as_ref())?;
                Ok(GridFilterValue::range(text(field, filter)?, text(field, filter_to)?))
            }
            GridFilterType::ValueSet => {
                let values = self.require(field, "values", self.values.as_ref())?;
                let values = values
                    .iter()
                    .map(|v| text(field, v))
                    .collect::<Result<Vec<_>>>()?;
                Ok(GridFilterValue::ValueSet { values })
            }
        }
    }

    /// Resolve into a specification over a numeric field.
    ///
    /// Returns `Ok(None)` when a coerced match has nothing left to filter on.
    pub fn resolve_numeric<T: NumericField>(
        &self,
        field: &str,
        policy: NumericPolicy,
    ) -> Result<Option<GridFilterValue<T>>> {
        match self.filter_type {
            GridFilterType::Match => {
                let raw = self.require(field, "filter", self.filter.as_ref())?;
                match T::from_json(raw) {
                    Some(filter) => Ok(Some(GridFilterValue::matching(filter))),
                    None => match invalid_number(policy, field, "filter", raw)? {
                        Fallback::MatchNothing => Ok(Some(GridFilterValue::nothing())),
                        Fallback::Unbounded => Ok(None),
                    },
                }
            }
            GridFilterType::Range => {
                let raw_from = self.require(field, "filter", self.filter.as_ref())?;
                let raw_to = self.require(field, "filterTo", self.filter_to.as_ref())?;

                let filter = match T::from_json(raw_from) {
                    Some(v) => v,
                    None => match invalid_number(policy, field, "filter", raw_from)? {
                        Fallback::MatchNothing => return Ok(Some(GridFilterValue::nothing())),
                        Fallback::Unbounded => T::LOWEST,
                    },
                };
                let filter_to = match T::from_json(raw_to) {
                    Some(v) => v,
                    None => match invalid_number(policy, field, "filterTo", raw_to)? {
                        Fallback::MatchNothing => return Ok(Some(GridFilterValue::nothing())),
                        Fallback::Unbounded => T::HIGHEST,
                    },
                };
                Ok(Some(GridFilterValue::range(filter, filter_to)))
            }
            GridFilterType::ValueSet => {
                let raw_values = self.require(field, "values", self.values.as_ref())?;
                let mut values = Vec::with_capacity(raw_values.len());
                for raw in raw_values {
                    match T::from_json(raw) {
                        Some(v) => values.push(v),
                        None => match invalid_number(policy, field, "values", raw)? {
                            Fallback::MatchNothing => return Ok(Some(GridFilterValue::nothing())),
                            Fallback::Unbounded => {}
                        },
                    }
                }
                Ok(Some(GridFilterValue::ValueSet { values }))
            }
        }
    }
}

fn raw_entries(doc: &Value) -> Result<BTreeMap<String, RawFilterValue>> {
    Ok(serde_json::from_value(doc.clone())?)
}

/// Resolve a JSON object of raw movie filters.
///
/// ```json
/// { "year": { "type": "range", "filter": "2022", "filterTo": 2025 },
///   "awards": { "type": "valueSet", "values": ["Oscar"] } }
/// ```
pub fn parse_movie_filters(doc: &Value, policy: NumericPolicy) -> Result<MovieFilters> {
    let mut filters = MovieFilters::default();
    for (field, raw) in raw_entries(doc)? {
        match field.as_str() {
            "title" => filters.title = Some(raw.resolve_text(&field)?),
            "year" => filters.year = raw.resolve_numeric::<Year>(&field, policy)?,
            "rating" => filters.rating = raw.resolve_numeric::<f64>(&field, policy)?,
            "awards" => filters.awards = Some(raw.resolve_text(&field)?),
            _ => return Err(FilterError::UnknownField(field)),
        }
    }
    Ok(filters)
}

/// Resolve a JSON object of raw category filters. Only `name` is accepted.
pub fn parse_category_filters(doc: &Value) -> Result<CategoryFilters> {
    let mut filters = CategoryFilters::default();
    for (field, raw) in raw_entries(doc)? {
        match field.as_str() {
            "name" => filters.name = Some(raw.resolve_text(&field)?),
            _ => return Err(FilterError::UnknownField(field)),
        }
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_are_accepted() {
        let filters = parse_movie_filters(
            &json!({ "year": { "type": "range", "filter": " 2022", "filterTo": 2025 } }),
            NumericPolicy::Reject,
        )
        .unwrap();

        assert_eq!(filters.year, Some(GridFilterValue::range(2022, 2025)));
    }

    #[test]
    fn test_reject_policy_errors() {
        let err = parse_movie_filters(
            &json!({ "rating": { "type": "range", "filter": "high", "filterTo": 10 } }),
            NumericPolicy::Reject,
        )
        .unwrap_err();

        assert!(matches!(err, FilterError::InvalidNumber { property: "filter", .. }));
    }

    #[test]
    fn test_exclude_policy_matches_nothing() {
        let filters = parse_movie_filters(
            &json!({ "year": { "type": "range", "filter": 2000, "filterTo": "later" } }),
            NumericPolicy::Exclude,
        )
        .unwrap();

        let year = filters.year.unwrap();
        assert!(!year.test(&2000));
        assert!(!year.test(&i32::MAX));
    }

    #[test]
    fn test_coerce_policy_opens_bound() {
        let filters = parse_movie_filters(
            &json!({
                "rating": { "type": "range", "filter": "NaN", "filterTo": 8 },
                "year": { "type": "match", "filter": "someday" }
            }),
            NumericPolicy::Coerce,
        )
        .unwrap();

        assert_eq!(filters.rating, Some(GridFilterValue::range(f64::NEG_INFINITY, 8.0)));
        assert!(filters.year.is_none());
    }

    #[test]
    fn test_value_set_skips_bad_elements_when_coercing() {
        let filters = parse_movie_filters(
            &json!({ "year": { "type": "valueSet", "values": [2021, "x", "2024"] } }),
            NumericPolicy::Coerce,
        )
        .unwrap();

        assert_eq!(filters.year, Some(GridFilterValue::value_set([2021, 2024])));
    }

    #[test]
    fn test_value_set_with_bad_element_excludes_everything() {
        let filters = parse_movie_filters(
            &json!({ "year": { "type": "valueSet", "values": [2021, "bogus"] } }),
            NumericPolicy::Exclude,
        )
        .unwrap();

        let year = filters.year.unwrap();
        assert_eq!(year, GridFilterValue::nothing());
        assert!(!year.test(&2021));

        let err = parse_movie_filters(
            &json!({ "year": { "type": "valueSet", "values": [2021, "bogus"] } }),
            NumericPolicy::Reject,
        )
        .unwrap_err();
        assert!(matches!(err, FilterError::InvalidNumber { property: "values", .. }));
    }

    #[test]
    fn test_integral_floats_accepted_for_year() {
        let filters = parse_movie_filters(
            &json!({ "year": { "type": "range", "filter": 2021.0, "filterTo": "2024.0" } }),
            NumericPolicy::Reject,
        )
        .unwrap();
        assert_eq!(filters.year, Some(GridFilterValue::range(2021, 2024)));

        let err = parse_movie_filters(&json!({ "year": { "type": "match", "filter": 2021.5 } }), NumericPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidNumber { .. }));
    }

    #[test]
    fn test_missing_property() {
        let err = parse_movie_filters(&json!({ "year": { "type": "range", "filter": 2000 } }), NumericPolicy::Exclude)
            .unwrap_err();

        assert!(matches!(
            err,
            FilterError::MissingProperty { property: "filterTo", filter_type: GridFilterType::Range, .. }
        ));
    }

    #[test]
    fn test_text_fields() {
        let filters = parse_movie_filters(
            &json!({
                "title": { "type": "match", "filter": "Dune" },
                "awards": { "type": "valueSet", "values": ["Oscar"] }
            }),
            NumericPolicy::Reject,
        )
        .unwrap();

        assert_eq!(filters.title, Some(GridFilterValue::matching("Dune".to_string())));
        assert_eq!(filters.awards, Some(GridFilterValue::value_set(["Oscar".to_string()])));

        let err = parse_movie_filters(&json!({ "title": { "type": "match", "filter": [1] } }), NumericPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, FilterError::UnexpectedType { .. }));
    }

    #[test]
    fn test_unknown_fields() {
        let err = parse_movie_filters(&json!({ "genre": { "type": "match", "filter": "x" } }), NumericPolicy::Exclude)
            .unwrap_err();
        assert!(matches!(err, FilterError::UnknownField(ref f) if f == "genre"));

        let err = parse_category_filters(&json!({ "title": { "type": "match", "filter": "x" } }))
            .unwrap_err();
        assert!(matches!(err, FilterError::UnknownField(_)));
    }

    #[test]
    fn test_category_name() {
        let filters =
            parse_category_filters(&json!({ "name": { "type": "match", "filter": "Sci" } }))
                .unwrap();
        assert_eq!(filters.name, Some(GridFilterValue::matching("Sci".to_string())));
    }

    #[test]
    fn test_not_an_object() {
        let err = parse_movie_filters(&json!([1, 2]), NumericPolicy::Exclude).unwrap_err();
        assert!(matches!(err, FilterError::JsonError(_)));
    }
}
