//! Core traits for the filtering pipeline.
//!
//! This module defines the RowFilter trait that allows composable,
//! extensible filters to be applied to borrowed table rows.

/// Core trait for filtering table rows.
///
/// All facet filters implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters operate on borrowed rows: the dataset is shared read-only, so
///   a request filters a view of it rather than cloning the table
/// - A filter is a pure predicate; applying it twice yields the same rows
///   as applying it once
pub trait RowFilter<R>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single row passes this filter.
    fn keep(&self, row: &R) -> bool;

    /// Apply this filter to a set of rows, keeping the passing ones
    /// in their original order.
    fn apply<'a>(&self, rows: Vec<&'a R>) -> Vec<&'a R> {
        rows.into_iter().filter(|row| self.keep(row)).collect()
    }
}
