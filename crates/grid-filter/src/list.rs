//! Filterable lists: a record store plus its current filter set.
//!
//! Mutating the filters never touches the records. Each call to
//! `get_filtered_*` rescans the store and returns a fresh, derived Vec.

use crate::filters::{CategoryFilters, MovieFilters};
use crate::value::GridFilterValue;
use catalog::{Category, Movie, RecordStore};
use tracing::debug;

/// A list of movies with a free-text search and structured field filters.
///
/// ## Example
/// ```ignore
/// let mut list = MovieList::new(movies);
/// list.apply_search_value("Dune");
/// list.apply_filters_value(MovieFilters::new().with_year(GridFilterValue::range(2022, 2025)));
/// let visible = list.get_filtered_movies();
/// ```
#[derive(Debug, Clone, Default)]
pub struct MovieList {
    movies: RecordStore<Movie>,
    filters: MovieFilters,
}

impl MovieList {
    /// Create a list over `movies` with no active filters
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: RecordStore::new(movies),
            filters: MovieFilters::default(),
        }
    }

    /// Set the title filter to a substring match on `value`.
    ///
    /// An empty string matches every title.
    pub fn apply_search_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        debug!("Applying movie search value: {:?}", value);
        self.filters.title = Some(GridFilterValue::matching(value));
    }

    /// Merge `filters` into the current set, field by field.
    pub fn apply_filters_value(&mut self, filters: MovieFilters) {
        debug!("Merging movie filters: {:?}", filters);
        self.filters.merge(filters);
    }

    /// Drop every active filter, search included
    pub fn clear_filters(&mut self) {
        self.filters = MovieFilters::default();
    }

    /// Movies satisfying every active filter, in their original order.
    pub fn get_filtered_movies(&self) -> Vec<Movie> {
        let filtered = self.filters.to_pipeline().apply(self.movies.records());
        debug!(
            "Filtered movies: {} of {} retained",
            filtered.len(),
            self.movies.len()
        );
        filtered
    }

    pub fn filters(&self) -> &MovieFilters {
        &self.filters
    }

    /// All movies, unfiltered
    pub fn movies(&self) -> &[Movie] {
        self.movies.records()
    }

    /// Replace the underlying movies; active filters are kept
    pub fn replace_movies(&mut self, movies: Vec<Movie>) {
        self.movies.replace(movies);
    }
}

/// A list of categories filterable by name.
#[derive(Debug, Clone, Default)]
pub struct CategoryList {
    categories: RecordStore<Category>,
    filters: CategoryFilters,
}

impl CategoryList {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: RecordStore::new(categories),
            filters: CategoryFilters::default(),
        }
    }

    /// Set the name filter to a substring match on `value`.
    pub fn apply_search_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        debug!("Applying category search value: {:?}", value);
        self.filters.name = Some(GridFilterValue::matching(value));
    }

    pub fn apply_filters_value(&mut self, filters: CategoryFilters) {
        debug!("Merging category filters: {:?}", filters);
        self.filters.merge(filters);
    }

    pub fn clear_filters(&mut self) {
        self.filters = CategoryFilters::default();
    }

    /// Categories satisfying every active filter, in their original order.
    pub fn get_filtered_categories(&self) -> Vec<Category> {
        let filtered = self.filters.to_pipeline().apply(self.categories.records());
        debug!(
            "Filtered categories: {} of {} retained",
            filtered.len(),
            self.categories.len()
        );
        filtered
    }

    pub fn filters(&self) -> &CategoryFilters {
        &self.filters
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.records()
    }

    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories.replace(categories);
    }
}
