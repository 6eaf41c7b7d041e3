//! The in-memory dataset and its one-time derived tables.
//!
//! `Dataset` owns the base ratings table, the genre-exploded derivative,
//! and the enumerated facet option lists. It is built once at startup and
//! shared read-only for the rest of the process lifetime; every view takes
//! `&Dataset` explicitly rather than reaching for global state.

use crate::error::{DataError, Result};
use crate::loader;
use crate::types::{AgeGroup, ExplodedRecord, RatingRecord};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// The loaded ratings dataset plus derived data.
///
/// Accessors hand out borrowed slices; nothing here is mutated after
/// construction.
#[derive(Debug)]
pub struct Dataset {
    /// Base table, in file order
    records: Vec<RatingRecord>,
    /// Genre-exploded derivative, in base-table order
    exploded: Vec<ExplodedRecord>,
    /// Distinct genres observed in the data, sorted
    genre_options: Vec<String>,
    /// Distinct release decades observed in the data, sorted
    decade_options: Vec<u16>,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// This is the main entry point. Steps:
    /// 1. Read and deserialize all rows (header check first)
    /// 2. Validate field ranges
    /// 3. Build the exploded table and facet option lists
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading ratings dataset");
        let records = loader::read_records(path)?;
        let dataset = Self::from_records(records)?;
        let (base, exploded) = dataset.counts();
        info!(
            rows = base,
            exploded_rows = exploded,
            genres = dataset.genre_options.len(),
            decades = dataset.decade_options.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Build a dataset from already-parsed records.
    ///
    /// Validation and derivation happen here so test fixtures go through
    /// the same path as CSV loads.
    pub fn from_records(records: Vec<RatingRecord>) -> Result<Self> {
        validate(&records)?;

        let exploded = explode(&records);

        let genre_options: Vec<String> = exploded
            .iter()
            .map(|row| row.genre.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let decade_options: Vec<u16> = records
            .iter()
            .map(|record| record.decade)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(Self {
            records,
            exploded,
            genre_options,
            decade_options,
        })
    }

    /// The base ratings table, one row per (user, movie) rating
    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    /// The exploded table, one row per (rating, genre) pair
    pub fn exploded(&self) -> &[ExplodedRecord] {
        &self.exploded
    }

    /// Distinct genre labels, sorted, for facet option lists
    pub fn genre_options(&self) -> &[String] {
        &self.genre_options
    }

    /// Distinct release decades, sorted, for facet option lists
    pub fn decade_options(&self) -> &[u16] {
        &self.decade_options
    }

    /// (base rows, exploded rows) for logging and validation
    pub fn counts(&self) -> (usize, usize) {
        (self.records.len(), self.exploded.len())
    }
}

/// Expand each record's genre list into one row per non-empty token.
///
/// Tokens are split on '|' and trimmed; empty tokens are skipped and a
/// record with no tokens contributes nothing. Tokens are not deduplicated
/// within a row. The indexed parallel iterator preserves base-table order.
fn explode(records: &[RatingRecord]) -> Vec<ExplodedRecord> {
    records
        .par_iter()
        .flat_map_iter(|record| {
            record
                .genres
                .split('|')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(|token| ExplodedRecord {
                    title: record.title.clone(),
                    genre: token.to_string(),
                    rating: record.rating,
                    age: record.age,
                    age_group: AgeGroup::from_age(record.age),
                    year: record.year,
                    decade: record.decade,
                })
        })
        .collect()
}

/// Check field ranges on the base table.
///
/// Ratings outside [1.0, 5.0] are rejected: the aggregation stages assume
/// the 1–5 scale and the source data guarantees it.
fn validate(records: &[RatingRecord]) -> Result<()> {
    for record in records {
        if !(1.0..=5.0).contains(&record.rating) {
            return Err(DataError::InvalidValue {
                field: "rating".to_string(),
                value: record.rating.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, genres: &str, rating: f32, age: u32, year: u16) -> RatingRecord {
        RatingRecord {
            title: title.to_string(),
            genres: genres.to_string(),
            rating,
            age,
            year,
            decade: year / 10 * 10,
        }
    }

    #[test]
    fn test_explosion_conservation() {
        let dataset = Dataset::from_records(vec![
            record("Toy Story (1995)", "Animation|Children's|Comedy", 4.0, 25, 1995),
            record("Heat (1995)", "Action|Crime|Thriller", 5.0, 31, 1995),
            record("Sabrina (1995)", "Comedy|Romance", 3.0, 17, 1995),
        ])
        .unwrap();

        // One exploded row per non-empty genre token
        assert_eq!(dataset.counts(), (3, 8));

        // The (title, genre) pairs are exactly the cross-product expansion
        let pairs: Vec<(&str, &str)> = dataset
            .exploded()
            .iter()
            .map(|row| (row.title.as_str(), row.genre.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Toy Story (1995)", "Animation"),
                ("Toy Story (1995)", "Children's"),
                ("Toy Story (1995)", "Comedy"),
                ("Heat (1995)", "Action"),
                ("Heat (1995)", "Crime"),
                ("Heat (1995)", "Thriller"),
                ("Sabrina (1995)", "Comedy"),
                ("Sabrina (1995)", "Romance"),
            ]
        );
    }

    #[test]
    fn test_empty_genre_field_drops_row() {
        let dataset = Dataset::from_records(vec![
            record("No Genres", "", 3.0, 40, 1980),
            record("One Genre", "Drama", 4.0, 40, 1980),
        ])
        .unwrap();

        assert_eq!(dataset.counts(), (2, 1));
        assert_eq!(dataset.exploded()[0].title, "One Genre");
    }

    #[test]
    fn test_duplicate_tokens_are_kept() {
        let dataset =
            Dataset::from_records(vec![record("Odd Row", "Drama|Drama", 2.0, 50, 1970)]).unwrap();
        assert_eq!(dataset.counts(), (1, 2));
    }

    #[test]
    fn test_option_lists_are_distinct_and_sorted() {
        let dataset = Dataset::from_records(vec![
            record("A", "Western|Action", 4.0, 20, 1990),
            record("B", "Action|Drama", 3.0, 30, 1970),
            record("C", "Drama", 5.0, 40, 1990),
        ])
        .unwrap();

        assert_eq!(dataset.genre_options(), ["Action", "Drama", "Western"]);
        assert_eq!(dataset.decade_options(), [1970, 1990]);
    }

    #[test]
    fn test_age_group_derived_on_exploded_rows() {
        let dataset =
            Dataset::from_records(vec![record("Kid Pick", "Animation", 4.0, 12, 1995)]).unwrap();
        assert_eq!(dataset.exploded()[0].age_group, AgeGroup::Under18);
    }

    #[test]
    fn test_out_of_range_rating_is_fatal() {
        let result = Dataset::from_records(vec![record("Bad Row", "Drama", 5.5, 30, 1990)]);
        assert!(matches!(result, Err(DataError::InvalidValue { .. })));
    }
}
