//! The FilterPipeline chains facet filters over one table.
//!
//! This module provides the FilterPipeline struct that applies multiple
//! row filters in sequence using the builder pattern. Combined filters are
//! an AND: a row survives only if every filter keeps it.

use crate::traits::RowFilter;
use tracing;

/// Chains multiple row filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AgeGroupFilter::from_labels(&ages)?)
///     .add_filter(DecadeFilter::from_labels(&decades)?);
///
/// let kept = pipeline.apply(dataset.exploded().iter().collect());
/// ```
pub struct FilterPipeline<R> {
    filters: Vec<Box<dyn RowFilter<R>>>,
}

impl<R> FilterPipeline<R> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl RowFilter<R> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// True if no filters were added — an empty pipeline keeps every row.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence, logging per-stage row counts.
    pub fn apply<'a>(&self, rows: Vec<&'a R>) -> Vec<&'a R> {
        let mut current = rows;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl<R> Default for FilterPipeline<R> {
    fn default() -> Self {
        Self::new()
    }
}
