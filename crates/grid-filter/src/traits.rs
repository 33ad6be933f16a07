//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! per-field predicates to be chained over a record list.

/// Core trait for filtering records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` keeps filters shareable if a list is moved across threads
/// - Filters only borrow the record; producing the filtered view is the
///   pipeline's job, so the source records are never consumed
pub trait Filter<R>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `record` should be retained.
    fn matches(&self, record: &R) -> bool;
}
