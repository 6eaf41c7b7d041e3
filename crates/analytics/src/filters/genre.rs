//! Filter to keep rows whose genre is in the selected set.

use crate::traits::RowFilter;
use data_loader::ExplodedRecord;
use std::collections::HashSet;

/// Keeps exploded rows whose single genre label is one of the selected
/// labels. Genre labels are open strings enumerated from the dataset, so
/// membership is by exact label.
pub struct GenreFilter {
    selected: HashSet<String>,
}

impl GenreFilter {
    pub fn new(labels: &[String]) -> Self {
        Self {
            selected: labels.iter().cloned().collect(),
        }
    }
}

impl RowFilter<ExplodedRecord> for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn keep(&self, row: &ExplodedRecord) -> bool {
        self.selected.contains(&row.genre)
    }
}
