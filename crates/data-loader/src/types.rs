//! Core domain types for the movie-ratings dataset.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Base Table Types
// =============================================================================

/// One row of the base ratings table, exactly as it appears in the CSV.
///
/// The `genres` field keeps the source's pipe-delimited form; the exploded
/// derivative (see [`ExplodedRecord`]) carries one genre per row instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Movie title, year usually embedded: "Toy Story (1995)"
    pub title: String,
    /// Pipe-delimited genre list: "Animation|Children's|Comedy"
    pub genres: String,
    /// Rating value from 1.0 to 5.0
    pub rating: f32,
    /// Age of the rating user in years
    pub age: u32,
    /// Movie release year
    pub year: u16,
    /// Release decade as its leading year (1990 for the 1990s)
    pub decade: u16,
}

/// One row of the genre-exploded derivative of the base table.
///
/// Each base record contributes one exploded record per non-empty genre
/// token; all other fields are copied unchanged. The viewer's age bucket
/// is derived once here so the filter stages never re-bucket per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplodedRecord {
    pub title: String,
    /// A single genre token from the base record's genre list
    pub genre: String,
    pub rating: f32,
    pub age: u32,
    pub age_group: AgeGroup,
    pub year: u16,
    pub decade: u16,
}

// =============================================================================
// Age Buckets
// =============================================================================

/// Viewer age buckets.
///
/// The eight ranges partition `[0, ∞)` with no gaps or overlaps: every
/// non-negative age maps to exactly one bucket. Labels match the facet
/// options shown to users, en dashes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Under18,
    Age18To24,
    Age25To34,
    Age35To44,
    Age45To49,
    Age50To55,
    Age56To65,
    Age66Plus,
}

impl AgeGroup {
    /// All buckets in ascending age order, matching the facet option list
    pub const ALL: [AgeGroup; 8] = [
        AgeGroup::Under18,
        AgeGroup::Age18To24,
        AgeGroup::Age25To34,
        AgeGroup::Age35To44,
        AgeGroup::Age45To49,
        AgeGroup::Age50To55,
        AgeGroup::Age56To65,
        AgeGroup::Age66Plus,
    ];

    /// Bucket a non-negative age. Total over `u32`, so every valid input
    /// lands in exactly one bucket; negative ages are rejected earlier,
    /// at CSV deserialization.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=17 => AgeGroup::Under18,
            18..=24 => AgeGroup::Age18To24,
            25..=34 => AgeGroup::Age25To34,
            35..=44 => AgeGroup::Age35To44,
            45..=49 => AgeGroup::Age45To49,
            50..=55 => AgeGroup::Age50To55,
            56..=65 => AgeGroup::Age56To65,
            66.. => AgeGroup::Age66Plus,
        }
    }

    /// User-facing label for this bucket
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Under18 => "<18",
            AgeGroup::Age18To24 => "18–24",
            AgeGroup::Age25To34 => "25–34",
            AgeGroup::Age35To44 => "35–44",
            AgeGroup::Age45To49 => "45–49",
            AgeGroup::Age50To55 => "50–55",
            AgeGroup::Age56To65 => "56–65",
            AgeGroup::Age66Plus => "66+",
        }
    }

    /// Parse a user-facing label back into a bucket.
    ///
    /// Accepts both the en-dash form shown in the UI ("18–24") and the
    /// plain-hyphen form people actually type ("18-24").
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "<18" => Some(AgeGroup::Under18),
            "18–24" | "18-24" => Some(AgeGroup::Age18To24),
            "25–34" | "25-34" => Some(AgeGroup::Age25To34),
            "35–44" | "35-44" => Some(AgeGroup::Age35To44),
            "45–49" | "45-49" => Some(AgeGroup::Age45To49),
            "50–55" | "50-55" => Some(AgeGroup::Age50To55),
            "56–65" | "56-65" => Some(AgeGroup::Age56To65),
            "66+" => Some(AgeGroup::Age66Plus),
            _ => None,
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
