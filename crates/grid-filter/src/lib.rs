//! Filtering for the movie and category grids.
//!
//! This crate provides:
//! - `GridFilterValue`, the Match / Range / ValueSet filter specification
//! - Filter trait and field-bound implementations
//! - FilterPipeline for composing filters
//! - `MovieFilters` / `CategoryFilters`, the per-list filter sets
//! - `MovieList` / `CategoryList`, which own records plus their filters
//! - Resolution of untyped JSON filters under a `NumericPolicy`
//!
//! ## Architecture
//! A list is filtered in stages:
//! 1. Callers update the filter set (search value, merged structured filters)
//! 2. The filter set builds a pipeline with one filter per present field
//! 3. The pipeline scans the record store and returns a derived view
//!
//! ## Example Usage
//! ```ignore
//! use grid_filter::{GridFilterValue, MovieFilters, MovieList};
//!
//! let mut list = MovieList::new(catalog.movies);
//! list.apply_search_value("Dune");
//! list.apply_filters_value(
//!     MovieFilters::new().with_awards(GridFilterValue::value_set(["Oscar".to_string()])),
//! );
//!
//! for movie in list.get_filtered_movies() {
//!     println!("{} ({})", movie.title, movie.year);
//! }
//! ```

pub mod error;
pub mod value;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod list;
pub mod raw;

// Re-export main types
pub use error::{FilterError, Result};
pub use filter_pipeline::FilterPipeline;
pub use filters::{CategoryFilters, MovieFilters};
pub use list::{CategoryList, MovieList};
pub use raw::{NumericPolicy, RawFilterValue, parse_category_filters, parse_movie_filters};
pub use traits::Filter;
pub use value::{FieldValue, GridFilterType, GridFilterValue};
