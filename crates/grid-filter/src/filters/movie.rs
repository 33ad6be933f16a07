//! The filter set for the movie grid.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::field::{ListFieldFilter, ScalarFieldFilter};
use crate::value::GridFilterValue;
use catalog::{Movie, Year};
use serde::{Deserialize, Serialize};

fn title(movie: &Movie) -> &String {
    &movie.title
}

fn year(movie: &Movie) -> &Year {
    &movie.year
}

fn rating(movie: &Movie) -> &f64 {
    &movie.rating
}

fn awards(movie: &Movie) -> &[String] {
    &movie.awards
}

/// Active filters for a movie list, one optional specification per field.
///
/// An absent entry imposes no constraint. Deserializes from the grid's
/// JSON shape, e.g.
/// `{ "year": { "type": "range", "filter": 2022, "filterTo": 2025 } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MovieFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<GridFilterValue<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<GridFilterValue<Year>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<GridFilterValue<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<GridFilterValue<String>>,
}

impl MovieFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, value: GridFilterValue<String>) -> Self {
        self.title = Some(value);
        self
    }

    pub fn with_year(mut self, value: GridFilterValue<Year>) -> Self {
        self.year = Some(value);
        self
    }

    pub fn with_rating(mut self, value: GridFilterValue<f64>) -> Self {
        self.rating = Some(value);
        self
    }

    pub fn with_awards(mut self, value: GridFilterValue<String>) -> Self {
        self.awards = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.year.is_none() && self.rating.is_none() && self.awards.is_none()
    }

    /// Overwrite every field present in `other`; fields absent from
    /// `other` keep their current entry.
    pub fn merge(&mut self, other: MovieFilters) {
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.year.is_some() {
            self.year = other.year;
        }
        if other.rating.is_some() {
            self.rating = other.rating;
        }
        if other.awards.is_some() {
            self.awards = other.awards;
        }
    }

    /// Build a pipeline with one filter per present entry.
    pub fn to_pipeline(&self) -> FilterPipeline<Movie> {
        let mut pipeline = FilterPipeline::new();
        if let Some(value) = &self.title {
            pipeline = pipeline.add_filter(ScalarFieldFilter::new("title", value.clone(), title));
        }
        if let Some(value) = &self.year {
            pipeline = pipeline.add_filter(ScalarFieldFilter::new("year", value.clone(), year));
        }
        if let Some(value) = &self.rating {
            pipeline = pipeline.add_filter(ScalarFieldFilter::new("rating", value.clone(), rating));
        }
        if let Some(value) = &self.awards {
            pipeline = pipeline.add_filter(ListFieldFilter::new("awards", value.clone(), awards));
        }
        pipeline
    }

    /// Evaluate the whole set against one movie.
    pub fn matches(&self, movie: &Movie) -> bool {
        self.to_pipeline().matches(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Movie {
        Movie::new("Dune", 2021, 8.0, ["Oscar"])
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let filters = MovieFilters::new();

        assert!(filters.is_empty());
        assert!(filters.to_pipeline().is_empty());
        assert!(filters.matches(&dune()));
    }

    #[test]
    fn test_merge_overwrites_only_present_fields() {
        let mut filters = MovieFilters::new()
            .with_title(GridFilterValue::matching("Dune".to_string()))
            .with_year(GridFilterValue::range(2000, 2010));

        filters.merge(MovieFilters::new().with_year(GridFilterValue::range(2020, 2022)));

        assert_eq!(filters.title, Some(GridFilterValue::matching("Dune".to_string())));
        assert_eq!(filters.year, Some(GridFilterValue::range(2020, 2022)));
        assert!(filters.rating.is_none());
    }

    #[test]
    fn test_pipeline_has_one_filter_per_entry() {
        let filters = MovieFilters::new()
            .with_rating(GridFilterValue::range(7.0, 9.0))
            .with_awards(GridFilterValue::value_set(["Oscar".to_string()]));

        assert_eq!(filters.to_pipeline().names(), vec!["rating", "awards"]);
    }

    #[test]
    fn test_match_on_year_and_awards_is_evaluated() {
        let by_year = MovieFilters::new().with_year(GridFilterValue::matching(2021));
        assert!(by_year.matches(&dune()));
        assert!(!MovieFilters::new().with_year(GridFilterValue::matching(1999)).matches(&dune()));

        let by_award = MovieFilters::new().with_awards(GridFilterValue::matching("Osc".to_string()));
        assert!(by_award.matches(&dune()));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let ok: MovieFilters =
            serde_json::from_str(r#"{ "rating": { "type": "range", "filter": 7.5, "filterTo": 10 } }"#).unwrap();
        assert_eq!(ok.rating, Some(GridFilterValue::range(7.5, 10.0)));

        assert!(serde_json::from_str::<MovieFilters>(r#"{ "genre": { "type": "match", "filter": "x" } }"#).is_err());
    }
}
