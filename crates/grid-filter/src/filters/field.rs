//! Filters bound to a single record field.
//!
//! Both filters pair a named [`GridFilterValue`] with a plain accessor
//! function, so one implementation serves every field of every record type.

use crate::traits::Filter;
use crate::value::{FieldValue, GridFilterValue};

/// Applies a specification to a single-valued field (title, year, rating, name).
pub struct ScalarFieldFilter<R, T> {
    name: &'static str,
    value: GridFilterValue<T>,
    field: fn(&R) -> &T,
}

impl<R, T> ScalarFieldFilter<R, T> {
    /// # Arguments
    /// * `name` - Field name, used in pipeline logs
    /// * `value` - The specification to evaluate
    /// * `field` - Accessor returning the field from a record
    pub fn new(name: &'static str, value: GridFilterValue<T>, field: fn(&R) -> &T) -> Self {
        Self { name, value, field }
    }
}

impl<R, T> Filter<R> for ScalarFieldFilter<R, T>
where
    T: FieldValue + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        self.value.test((self.field)(record))
    }
}

/// Applies a specification to a multi-valued field (awards).
///
/// A record passes when any element of the field passes.
pub struct ListFieldFilter<R, T> {
    name: &'static str,
    value: GridFilterValue<T>,
    field: fn(&R) -> &[T],
}

impl<R, T> ListFieldFilter<R, T> {
    pub fn new(name: &'static str, value: GridFilterValue<T>, field: fn(&R) -> &[T]) -> Self {
        Self { name, value, field }
    }
}

impl<R, T> Filter<R> for ListFieldFilter<R, T>
where
    T: FieldValue + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        self.value.test_any((self.field)(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged {
        label: String,
        tags: Vec<String>,
    }

    fn label(record: &Tagged) -> &String {
        &record.label
    }

    fn tags(record: &Tagged) -> &[String] {
        &record.tags
    }

    fn record(label: &str, tags: &[&str]) -> Tagged {
        Tagged {
            label: label.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_scalar_field_filter() {
        let filter = ScalarFieldFilter::new("label", GridFilterValue::matching("ab".to_string()), label);

        assert_eq!(filter.name(), "label");
        assert!(filter.matches(&record("cabin", &[])));
        assert!(!filter.matches(&record("cbin", &[])));
    }

    #[test]
    fn test_list_field_filter() {
        let filter = ListFieldFilter::new(
            "tags",
            GridFilterValue::value_set(["x".to_string(), "y".to_string()]),
            tags,
        );

        assert!(filter.matches(&record("", &["a", "y"])));
        assert!(!filter.matches(&record("", &["a", "b"])));
        assert!(!filter.matches(&record("", &[])));
    }
}
