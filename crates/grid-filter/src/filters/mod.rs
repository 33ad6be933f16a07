//! Filter implementations for the grid lists.
//!
//! This module contains the field-bound filters and the per-list filter
//! sets that assemble them into a FilterPipeline.

pub mod category;
pub mod field;
pub mod movie;

// Re-export for convenience
pub use category::CategoryFilters;
pub use field::{ListFieldFilter, ScalarFieldFilter};
pub use movie::MovieFilters;
