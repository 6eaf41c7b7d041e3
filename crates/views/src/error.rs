//! Guard outcomes for the views.

use analytics::SelectionError;
use thiserror::Error;

/// Why a view did not produce a result.
///
/// `MissingSelection` and `NoData` are informational guard outcomes, not
/// failures: the surface renders their message as a prompt. Only
/// `InvalidSelection` indicates bad input.
#[derive(Error, Debug)]
pub enum ViewError {
    /// The view requires at least one facet selection before running
    #[error("{0}")]
    MissingSelection(&'static str),

    /// Filtering matched zero rows; aggregation is never reached
    #[error("{0}")]
    NoData(&'static str),

    /// A facet label didn't map to a known category
    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ViewError>;
