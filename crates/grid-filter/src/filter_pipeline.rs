//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ScalarFieldFilter::new("title", GridFilterValue::matching("Dune".into()), title))
///     .add_filter(ScalarFieldFilter::new("year", GridFilterValue::range(2022, 2025), year));
///
/// let filtered = pipeline.apply(&movies);
/// ```
pub struct FilterPipeline<R> {
    filters: Vec<Box<dyn Filter<R>>>,
}

impl<R> FilterPipeline<R> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter<R> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// True if every filter retains `record`. An empty pipeline retains everything.
    pub fn matches(&self, record: &R) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    /// Build the filtered view of `records`.
    ///
    /// ## Algorithm
    /// 1. Start with references to every input record
    /// 2. For each filter in order, retain only the records it matches,
    ///    logging the counts before and after
    /// 3. Clone the survivors into a fresh Vec
    ///
    /// `retain` keeps relative order, so the output order is the input order.
    /// The input slice is never modified.
    pub fn apply(&self, records: &[R]) -> Vec<R>
    where
        R: Clone,
    {
        let mut current: Vec<&R> = records.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|record| filter.matches(record));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current.into_iter().cloned().collect()
    }
}

impl<R> Default for FilterPipeline<R> {
    fn default() -> Self {
        Self::new()
    }
}
