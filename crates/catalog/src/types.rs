//! Core domain types for the film catalog.
//!
//! Two flat record shapes are filtered by the grid: movies and categories.
//! Records have no identity of their own; they are compared only by field
//! values.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Release year of a movie
pub type Year = i32;

// =============================================================================
// Records
// =============================================================================

/// A single film in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Year,
    /// Critic/user score, usually on a 0-10 scale
    pub rating: f64,
    /// Award names, ordered as given; treated as a set when filtering
    #[serde(default)]
    pub awards: Vec<String>,
}

impl Movie {
    /// Build a movie record.
    ///
    /// Awards accept anything string-like so tests and callers can pass
    /// `&["Oscar"]` or `Vec<String>` alike.
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        year: Year,
        rating: f64,
        awards: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            awards: awards.into_iter().map(Into::into).collect(),
        }
    }
}

/// A named group of movies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

impl Category {
    pub fn new(name: impl Into<String>, movies: Vec<Movie>) -> Self {
        Self {
            name: name.into(),
            movies,
        }
    }
}

// =============================================================================
// Catalog document
// =============================================================================

/// The input document: both lists are optional and default to empty.
///
/// ```json
/// { "movies": [ { "title": "Dune", "year": 2021, "rating": 8.0, "awards": ["Oscar"] } ],
///   "categories": [ { "name": "Sci-Fi", "movies": [] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Get counts for logging
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.categories.len())
    }
}
