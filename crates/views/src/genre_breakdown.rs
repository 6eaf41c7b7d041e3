//! Breakdown of movie genres by number of ratings.
//!
//! Rating counts are computed over the full exploded table and then
//! restricted to the user's genre selection; the percentage mode
//! normalizes against the *selected* subset's total, not the whole
//! dataset. Output rows keep the user's selection order, which is also
//! the bar order on the chart.

use crate::chart::{ChartKind, ChartSpec};
use crate::error::{Result, ViewError};
use analytics::{count_by, with_percentages, FacetSelection};
use data_loader::Dataset;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Y-axis toggle for the breakdown view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Counts,
    Percentages,
}

impl DisplayMode {
    /// Metric-axis label for this mode
    pub fn y_label(&self) -> &'static str {
        match self {
            DisplayMode::Counts => "Number of Ratings",
            DisplayMode::Percentages => "Percentage of Ratings (%)",
        }
    }
}

/// One output row: a genre, its rating count, and (in percentage mode)
/// its share of the selected subset.
#[derive(Debug, Clone, Serialize)]
pub struct GenreBreakdownRow {
    pub genre: String,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

/// Result of the genre-breakdown view, rows in selection order.
#[derive(Debug, Clone, Serialize)]
pub struct GenreBreakdown {
    pub mode: DisplayMode,
    pub rows: Vec<GenreBreakdownRow>,
}

impl GenreBreakdown {
    /// Chart-ready form: vertical bars, one per selected genre.
    pub fn chart_spec(&self) -> ChartSpec {
        let values = self
            .rows
            .iter()
            .map(|row| match self.mode {
                DisplayMode::Counts => row.count as f64,
                DisplayMode::Percentages => row.percent.unwrap_or(0.0),
            })
            .collect();
        ChartSpec {
            kind: ChartKind::Bar,
            title: format!("Breakdown of Selected Genres by {}", self.mode.y_label()),
            x_label: "Genre".to_string(),
            y_label: self.mode.y_label().to_string(),
            categories: self.rows.iter().map(|row| row.genre.clone()).collect(),
            values,
            value_range: None,
        }
    }
}

/// Rating counts per genre, restricted to the selected genres.
///
/// Requires a non-empty selection; the "Select All" sentinel expands to
/// every genre observed in the dataset (sorted).
pub fn genre_breakdown(
    dataset: &Dataset,
    genres: &FacetSelection,
    mode: DisplayMode,
) -> Result<GenreBreakdown> {
    let selected = genres.resolve(dataset.genre_options());
    if selected.is_empty() {
        return Err(ViewError::MissingSelection(
            "Please select at least one genre (or 'Select All').",
        ));
    }

    let counts = count_by(dataset.exploded().iter(), |row| row.genre.clone());
    let by_genre: HashMap<&str, u64> = counts
        .iter()
        .map(|(genre, count)| (genre.as_str(), *count))
        .collect();

    // Restrict to the selection, in selection order. Selected genres with
    // no rows simply don't appear.
    let filtered: Vec<(String, u64)> = selected
        .iter()
        .filter_map(|genre| by_genre.get(genre.as_str()).map(|&count| (genre.clone(), count)))
        .collect();

    if filtered.is_empty() {
        return Err(ViewError::NoData("No data available for the selected genres."));
    }
    debug!(genres = filtered.len(), "genre breakdown computed");

    let rows = match mode {
        DisplayMode::Counts => filtered
            .into_iter()
            .map(|(genre, count)| GenreBreakdownRow {
                genre,
                count,
                percent: None,
            })
            .collect(),
        DisplayMode::Percentages => with_percentages(&filtered)
            .into_iter()
            .map(|(genre, count, percent)| GenreBreakdownRow {
                genre,
                count,
                percent: Some(percent),
            })
            .collect(),
    };

    Ok(GenreBreakdown { mode, rows })
}
