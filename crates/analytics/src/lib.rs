//! Pipeline for faceted filtering and aggregation of rating rows.
//!
//! This crate provides:
//! - FacetSelection and "Select All" sentinel resolution
//! - RowFilter trait and per-facet implementations
//! - FilterPipeline for composing filters
//! - Group-by aggregation, top-N selection and the percentage transform
//!
//! ## Architecture
//! Each view's request runs the same linear shape:
//! 1. Resolve facet selections against the dataset's option lists
//! 2. Filter borrowed rows through a FilterPipeline (AND of non-empty facets)
//! 3. Aggregate the survivors (count and/or mean per group key)
//! 4. Post-process (sort, top-N, percentages) for presentation
//!
//! ## Example Usage
//! ```ignore
//! use analytics::filters::{AgeGroupFilter, DecadeFilter};
//! use analytics::{mean_by, FilterPipeline};
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(AgeGroupFilter::from_labels(&ages)?)
//!     .add_filter(DecadeFilter::from_labels(&decades)?);
//!
//! let kept = pipeline.apply(dataset.exploded().iter().collect());
//! let stats = mean_by(kept, |row| row.genre.clone(), |row| f64::from(row.rating));
//! ```

pub mod aggregate;
pub mod error;
pub mod facet;
pub mod filters;
pub mod pipeline;
pub mod traits;

// Re-export main types
pub use aggregate::{count_by, mean_by, round2, top_by_mean, with_percentages, GroupStats};
pub use error::SelectionError;
pub use facet::{FacetSelection, SELECT_ALL};
pub use pipeline::FilterPipeline;
pub use traits::RowFilter;
