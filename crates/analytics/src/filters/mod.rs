//! Facet filter implementations.
//!
//! This module contains the concrete row filters — one per facet — that
//! can be composed into a FilterPipeline. Views add a filter only for
//! facets with a non-empty resolved selection, so combined facets are an
//! AND of the facets the user actually touched.

pub mod age_group;
pub mod decade;
pub mod genre;

// Re-export for convenience
pub use age_group::AgeGroupFilter;
pub use decade::DecadeFilter;
pub use genre::GenreFilter;
