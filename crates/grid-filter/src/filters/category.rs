//! The filter set for the category grid.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::field::ScalarFieldFilter;
use crate::value::GridFilterValue;
use catalog::Category;
use serde::{Deserialize, Serialize};

fn name(category: &Category) -> &String {
    &category.name
}

/// Active filters for a category list. Only the name is filterable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<GridFilterValue<String>>,
}

impl CategoryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: GridFilterValue<String>) -> Self {
        self.name = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    pub fn merge(&mut self, other: CategoryFilters) {
        if other.name.is_some() {
            self.name = other.name;
        }
    }

    pub fn to_pipeline(&self) -> FilterPipeline<Category> {
        let mut pipeline = FilterPipeline::new();
        if let Some(value) = &self.name {
            pipeline = pipeline.add_filter(ScalarFieldFilter::new("name", value.clone(), name));
        }
        pipeline
    }

    pub fn matches(&self, category: &Category) -> bool {
        self.to_pipeline().matches(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_filter() {
        let drama = Category::new("Drama", vec![]);
        let filters = CategoryFilters::new().with_name(GridFilterValue::matching("ram".to_string()));

        assert!(filters.matches(&drama));
        assert!(!filters.matches(&Category::new("Comedy", vec![])));
        assert!(CategoryFilters::new().matches(&drama));
    }

    #[test]
    fn test_merge_keeps_existing_when_absent() {
        let mut filters = CategoryFilters::new().with_name(GridFilterValue::matching("a".to_string()));
        filters.merge(CategoryFilters::new());

        assert_eq!(filters.name, Some(GridFilterValue::matching("a".to_string())));
    }
}
