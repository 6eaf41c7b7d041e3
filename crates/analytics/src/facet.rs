//! Facet selections and the "Select All" sentinel.
//!
//! Every view's option lists carry a leading "Select All" entry. The
//! sentinel is resolved here, in one place, to the facet's full enumerated
//! option list before any membership test — it is never treated as a
//! literal label. The per-view copies of this logic in the original
//! surface are deliberately collapsed into this one component.

/// The sentinel option that expands to the facet's full label set
pub const SELECT_ALL: &str = "Select All";

/// A user's selection for one facet: zero or more category labels,
/// possibly including the [`SELECT_ALL`] sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    labels: Vec<String>,
}

impl FacetSelection {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// True if the user selected nothing at all.
    ///
    /// An empty selection is *not* auto-expanded to "all"; each view
    /// decides what an empty facet means (a prompt, or no filter).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolve the selection against the facet's full option list.
    ///
    /// If the sentinel is present anywhere in the selection, the full
    /// option list is returned; otherwise the labels come back in the
    /// user's original order (view 1 renders bars in selection order).
    pub fn resolve(&self, options: &[String]) -> Vec<String> {
        if self.labels.iter().any(|label| label == SELECT_ALL) {
            options.to_vec()
        } else {
            self.labels.clone()
        }
    }
}
