//! Viewer satisfaction by genre, after age-group and decade filters.

use crate::chart::{ChartKind, ChartSpec};
use crate::error::{Result, ViewError};
use analytics::filters::decade::decade_label;
use analytics::filters::{AgeGroupFilter, DecadeFilter};
use analytics::{mean_by, FacetSelection, FilterPipeline};
use data_loader::{AgeGroup, Dataset, ExplodedRecord};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// One output row: a genre with its average rating and support count
/// over the filtered rows.
#[derive(Debug, Clone, Serialize)]
pub struct GenreSatisfactionRow {
    pub genre: String,
    pub avg_rating: f64,
    pub num_ratings: u64,
}

/// Result of the satisfaction view, rows sorted ascending by average
/// rating (the order the horizontal bars are drawn in).
#[derive(Debug, Clone, Serialize)]
pub struct GenreSatisfaction {
    pub rows: Vec<GenreSatisfactionRow>,
}

impl GenreSatisfaction {
    /// Chart-ready form: horizontal bars, rating on the value axis.
    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::HorizontalBar,
            title: "Highest Viewer Satisfaction by Genre (after filters)".to_string(),
            x_label: "Average Rating (1–5)".to_string(),
            y_label: "Genre".to_string(),
            categories: self.rows.iter().map(|row| row.genre.clone()).collect(),
            values: self.rows.iter().map(|row| row.avg_rating).collect(),
            value_range: None,
        }
    }
}

/// Average rating per genre over exploded rows surviving the age-group
/// and decade facets.
///
/// Both facets support the "Select All" sentinel. Both empty is a
/// missing-selection prompt; when exactly one is empty, only the
/// non-empty facet filters (the empty one is simply not applied).
pub fn satisfaction_by_genre(
    dataset: &Dataset,
    ages: &FacetSelection,
    decades: &FacetSelection,
) -> Result<GenreSatisfaction> {
    let age_options: Vec<String> = AgeGroup::ALL
        .iter()
        .map(|group| group.label().to_string())
        .collect();
    let decade_options: Vec<String> = dataset
        .decade_options()
        .iter()
        .map(|&decade| decade_label(decade))
        .collect();

    let selected_ages = ages.resolve(&age_options);
    let selected_decades = decades.resolve(&decade_options);

    if selected_ages.is_empty() && selected_decades.is_empty() {
        return Err(ViewError::MissingSelection(
            "Please select at least one age group and/or decade.",
        ));
    }

    let mut pipeline: FilterPipeline<ExplodedRecord> = FilterPipeline::new();
    if !selected_ages.is_empty() {
        pipeline = pipeline.add_filter(AgeGroupFilter::from_labels(&selected_ages)?);
    }
    if !selected_decades.is_empty() {
        pipeline = pipeline.add_filter(DecadeFilter::from_labels(&selected_decades)?);
    }

    let kept = pipeline.apply(dataset.exploded().iter().collect());
    if kept.is_empty() {
        return Err(ViewError::NoData(
            "No data after applying these filters. Try widening your selections.",
        ));
    }
    debug!(rows = kept.len(), "satisfaction filters applied");

    let mut stats = mean_by(kept, |row| row.genre.clone(), |row| f64::from(row.rating));
    stats.sort_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(Ordering::Equal));

    Ok(GenreSatisfaction {
        rows: stats
            .into_iter()
            .map(|group| GenreSatisfactionRow {
                genre: group.key,
                avg_rating: group.mean,
                num_ratings: group.count,
            })
            .collect(),
    })
}
