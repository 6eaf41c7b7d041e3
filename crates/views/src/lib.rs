//! Views crate for the movie-insights engine.
//!
//! Each of the four user-facing views is a pure function from
//! `(&Dataset, selections)` to a result-or-guard-outcome. The dataset is
//! loaded once by the caller and passed in explicitly; a view never holds
//! state between requests, so re-running one is just calling it again.
//!
//! - **genre_breakdown**: rating counts (or percentages) per selected genre
//! - **satisfaction**: average rating per genre after age/decade filters
//! - **trend**: mean rating per release year, optionally per decade
//! - **top_movies**: best-rated movies above a support threshold
//!
//! Chart-presenting views expose a `chart_spec()`; rendering belongs to
//! the surface, not this crate.

pub mod chart;
pub mod error;
pub mod genre_breakdown;
pub mod satisfaction;
pub mod top_movies;
pub mod trend;

pub use chart::{ChartKind, ChartSpec};
pub use error::{Result, ViewError};
pub use genre_breakdown::{genre_breakdown, DisplayMode, GenreBreakdown, GenreBreakdownRow};
pub use satisfaction::{satisfaction_by_genre, GenreSatisfaction, GenreSatisfactionRow};
pub use top_movies::{top_movies, MovieStatsRow, TopMovies, DEFAULT_THRESHOLDS, TOP_LIMIT};
pub use trend::{rating_trend, RatingTrend, YearlyRating};
