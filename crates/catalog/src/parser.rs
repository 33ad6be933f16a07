//! Parser for catalog documents.
//!
//! A catalog is a single JSON document holding the movie list and the
//! category list (see [`Catalog`]). Parsing is delegated to serde_json;
//! this module only maps file-system failures onto [`CatalogError`].

use crate::error::{CatalogError, Result};
use crate::types::Catalog;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Parse a catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(json)?;
    Ok(catalog)
}

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let catalog = parse_catalog(&content)?;
    let (movies, categories) = catalog.counts();
    info!(
        "Loaded catalog from {}: {} movies, {} categories",
        path.display(),
        movies,
        categories
    );
    Ok(catalog)
}

impl Catalog {
    /// Load a catalog document from disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        load_catalog(path)
    }
}
