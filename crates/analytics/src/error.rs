//! Error types for facet selections.

use thiserror::Error;

/// A user-supplied facet label that doesn't map to a known category.
///
/// These surface before any filtering runs: a malformed label is an error,
/// never a silently empty match.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// Label isn't one of the eight age-group buckets
    #[error("Unknown age group label: {0}")]
    UnknownAgeGroup(String),

    /// Label isn't a decade like "1990s"
    #[error("Unknown decade label: {0}")]
    UnknownDecade(String),
}
