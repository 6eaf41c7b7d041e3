//! Top best-rated movies above a minimum ratings threshold.

use crate::error::{Result, ViewError};
use analytics::{mean_by, top_by_mean};
use data_loader::Dataset;
use serde::Serialize;

/// How many movies a top list shows at most
pub const TOP_LIMIT: usize = 5;

/// The thresholds the surface presents side by side
pub const DEFAULT_THRESHOLDS: [u64; 2] = [50, 150];

/// One output row: a movie with its average rating and support count.
#[derive(Debug, Clone, Serialize)]
pub struct MovieStatsRow {
    pub title: String,
    pub avg_rating: f64,
    pub num_ratings: u64,
}

/// Result of the top-movies view: up to [`TOP_LIMIT`] movies with at
/// least `min_ratings` ratings, best average first.
#[derive(Debug, Clone, Serialize)]
pub struct TopMovies {
    pub min_ratings: u64,
    pub rows: Vec<MovieStatsRow>,
}

/// Best-rated movies over the whole base table.
///
/// Movies below the support threshold are dropped before ranking, so a
/// 5.0-average title with a handful of ratings never outranks a
/// well-supported 4.9. Fewer than [`TOP_LIMIT`] qualifying movies returns
/// all of them; zero is the no-data outcome.
pub fn top_movies(dataset: &Dataset, min_ratings: u64) -> Result<TopMovies> {
    let stats = mean_by(
        dataset.records().iter(),
        |row| row.title.clone(),
        |row| f64::from(row.rating),
    );

    let top = top_by_mean(stats, min_ratings, TOP_LIMIT);
    if top.is_empty() {
        return Err(ViewError::NoData(
            "No movies meet the minimum ratings threshold.",
        ));
    }

    Ok(TopMovies {
        min_ratings,
        rows: top
            .into_iter()
            .map(|group| MovieStatsRow {
                title: group.key,
                avg_rating: group.mean,
                num_ratings: group.count,
            })
            .collect(),
    })
}
