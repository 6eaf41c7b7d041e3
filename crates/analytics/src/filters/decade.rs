//! Filter to keep rows from the selected release decades.
//!
//! Decade facets are shown as labels like "1990s" but the dataset stores
//! the decade as its leading year (1990). Labels are mapped to that
//! integer once, at construction, and rows are compared numerically.

use crate::error::SelectionError;
use crate::traits::RowFilter;
use data_loader::{ExplodedRecord, RatingRecord};
use std::collections::HashSet;

/// Render a numeric decade as its facet label: 1990 -> "1990s".
pub fn decade_label(decade: u16) -> String {
    format!("{decade}s")
}

/// Parse a facet label back to its numeric decade.
///
/// Accepts "1990s" and the bare "1990" form.
pub fn parse_decade_label(label: &str) -> Result<u16, SelectionError> {
    let trimmed = label.trim();
    let digits = trimmed.strip_suffix('s').unwrap_or(trimmed);
    digits
        .parse::<u16>()
        .map_err(|_| SelectionError::UnknownDecade(label.to_string()))
}

/// Keeps rows whose release decade is one of the selected decades.
///
/// Implemented for both the base and the exploded table: the satisfaction
/// view filters exploded rows, the trend view filters base rows.
pub struct DecadeFilter {
    selected: HashSet<u16>,
}

impl DecadeFilter {
    /// Build the filter from user-facing labels such as "1990s".
    pub fn from_labels(labels: &[String]) -> Result<Self, SelectionError> {
        let selected = labels
            .iter()
            .map(|label| parse_decade_label(label))
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { selected })
    }
}

impl RowFilter<ExplodedRecord> for DecadeFilter {
    fn name(&self) -> &str {
        "DecadeFilter"
    }

    fn keep(&self, row: &ExplodedRecord) -> bool {
        self.selected.contains(&row.decade)
    }
}

impl RowFilter<RatingRecord> for DecadeFilter {
    fn name(&self) -> &str {
        "DecadeFilter"
    }

    fn keep(&self, row: &RatingRecord) -> bool {
        self.selected.contains(&row.decade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: u16) -> RatingRecord {
        RatingRecord {
            title: "Some Movie".to_string(),
            genres: "Drama".to_string(),
            rating: 4.0,
            age: 30,
            year,
            decade: year / 10 * 10,
        }
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(parse_decade_label("1990s").unwrap(), 1990);
        assert_eq!(parse_decade_label("1920").unwrap(), 1920);
        assert_eq!(decade_label(1950), "1950s");
        assert!(parse_decade_label("the nineties").is_err());
    }

    #[test]
    fn test_keeps_selected_decades() {
        let rows = [row(1923), row(1955), row(1994), row(1999)];
        let filter = DecadeFilter::from_labels(&["1990s".to_string()]).unwrap();

        let kept = filter.apply(rows.iter().collect());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.decade == 1990));
    }
}
