//! Mean rating across movie release years.

use crate::chart::{ChartKind, ChartSpec};
use crate::error::{Result, ViewError};
use analytics::filters::decade::decade_label;
use analytics::filters::DecadeFilter;
use analytics::{mean_by, FacetSelection, RowFilter};
use data_loader::{Dataset, RatingRecord};
use serde::Serialize;
use tracing::debug;

/// One point on the trend line: a release year with the mean rating of
/// its movies and the supporting rating count.
#[derive(Debug, Clone, Serialize)]
pub struct YearlyRating {
    pub year: u16,
    pub avg_rating: f64,
    pub num_ratings: u64,
}

/// Result of the trend view, points sorted by year.
#[derive(Debug, Clone, Serialize)]
pub struct RatingTrend {
    pub points: Vec<YearlyRating>,
}

impl RatingTrend {
    /// Chart-ready form: a line over years with the rating axis pinned
    /// to the 1–5 scale.
    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            title: "Average Movie Rating by Release Year".to_string(),
            x_label: "Release Year".to_string(),
            y_label: "Average Rating (1–5)".to_string(),
            categories: self.points.iter().map(|p| p.year.to_string()).collect(),
            values: self.points.iter().map(|p| p.avg_rating).collect(),
            value_range: Some((1.0, 5.0)),
        }
    }
}

/// Mean rating per release year over the base table, optionally
/// restricted to selected decades.
///
/// Unlike the breakdown view, an empty selection here means "no decade
/// filter": the trend is computed over every decade. This asymmetry is
/// intentional and mirrors the surface's behavior.
pub fn rating_trend(dataset: &Dataset, decades: &FacetSelection) -> Result<RatingTrend> {
    let decade_options: Vec<String> = dataset
        .decade_options()
        .iter()
        .map(|&decade| decade_label(decade))
        .collect();
    let selected = decades.resolve(&decade_options);

    let rows: Vec<&RatingRecord> = if selected.is_empty() {
        dataset.records().iter().collect()
    } else {
        let filter = DecadeFilter::from_labels(&selected)?;
        filter.apply(dataset.records().iter().collect())
    };

    if rows.is_empty() {
        return Err(ViewError::NoData("No data available for the selected decades."));
    }
    debug!(rows = rows.len(), "trend filter applied");

    let mut stats = mean_by(rows, |row| row.year, |row| f64::from(row.rating));
    stats.sort_by_key(|group| group.key);

    Ok(RatingTrend {
        points: stats
            .into_iter()
            .map(|group| YearlyRating {
                year: group.key,
                avg_rating: group.mean,
                num_ratings: group.count,
            })
            .collect(),
    })
}
