//! # Data Loader Crate
//!
//! This crate handles loading the movie-ratings CSV into memory and
//! deriving the tables the analytics views run against.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RatingRecord, ExplodedRecord, AgeGroup)
//! - **loader**: Read and deserialize the headered CSV file
//! - **dataset**: The Dataset handle — base table, genre-exploded derivative,
//!   facet option lists
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! // Load the entire dataset once at startup
//! let dataset = Dataset::load_from_csv(Path::new("movie_ratings.csv"))?;
//!
//! // Query derived data
//! let (rows, exploded_rows) = dataset.counts();
//! let genres = dataset.genre_options();
//!
//! println!("{rows} ratings over {} genres", genres.len());
//! ```
//!
//! The dataset is loaded once and read-only afterwards; views receive
//! `&Dataset` and never mutate it.

// Public modules
pub mod error;
pub mod types;
pub mod loader;
pub mod dataset;

// Re-export commonly used types for convenience
pub use error::{DataError, Result};
pub use dataset::Dataset;
pub use types::{AgeGroup, ExplodedRecord, RatingRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_to_dataset_round_trip() {
        let csv = "\
title,genres,rating,age,year,decade
Toy Story (1995),Animation|Children's|Comedy,4.0,25,1995,1990
Heat (1995),Action|Crime|Thriller,5.0,31,1995,1990
";
        let records = loader::read_records_from(csv.as_bytes()).unwrap();
        let dataset = Dataset::from_records(records).unwrap();

        assert_eq!(dataset.counts(), (2, 6));
        assert_eq!(dataset.decade_options(), [1990]);
        assert!(dataset.genre_options().contains(&"Thriller".to_string()));
    }

    #[test]
    fn test_empty_input_is_a_valid_dataset() {
        let dataset = Dataset::from_records(Vec::new()).unwrap();
        assert_eq!(dataset.counts(), (0, 0));
        assert!(dataset.genre_options().is_empty());
        assert!(dataset.decade_options().is_empty());
    }
}
