//! # Catalog Crate
//!
//! Data model and in-memory storage for the film grid.
//!
//! ## Main Components
//!
//! - **types**: Record shapes (Movie, Category) and the Catalog document
//! - **store**: `RecordStore`, the ordered sequence a list filters over
//! - **parser**: Load a catalog document from JSON
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, RecordStore};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/catalog.json"))?;
//! let store = RecordStore::new(catalog.movies);
//!
//! println!("{} movies loaded", store.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod store;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{load_catalog, parse_catalog};
pub use store::RecordStore;
pub use types::{Catalog, Category, Movie, Year};
