//! Filter to keep rows from viewers in the selected age buckets.

use crate::error::SelectionError;
use crate::traits::RowFilter;
use data_loader::{AgeGroup, ExplodedRecord};
use std::collections::HashSet;

/// Keeps exploded rows whose viewer falls in one of the selected age
/// buckets. Labels are parsed up front; an unknown label is a
/// [`SelectionError`], not an empty match.
pub struct AgeGroupFilter {
    selected: HashSet<AgeGroup>,
}

impl AgeGroupFilter {
    /// Build the filter from user-facing labels such as "18–24".
    pub fn from_labels(labels: &[String]) -> Result<Self, SelectionError> {
        let selected = labels
            .iter()
            .map(|label| {
                AgeGroup::from_label(label)
                    .ok_or_else(|| SelectionError::UnknownAgeGroup(label.clone()))
            })
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { selected })
    }
}

impl RowFilter<ExplodedRecord> for AgeGroupFilter {
    fn name(&self) -> &str {
        "AgeGroupFilter"
    }

    fn keep(&self, row: &ExplodedRecord) -> bool {
        self.selected.contains(&row.age_group)
    }
}
