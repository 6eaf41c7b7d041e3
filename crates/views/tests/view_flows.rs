//! Integration tests for the four views.
//!
//! These exercise the full request shape — selection resolution, facet
//! filtering, aggregation, guard outcomes — over a small in-memory
//! dataset with hand-checked numbers.

use analytics::{FacetSelection, SELECT_ALL};
use data_loader::{Dataset, RatingRecord};
use views::{
    genre_breakdown, rating_trend, satisfaction_by_genre, top_movies, DisplayMode, ViewError,
};

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

fn test_dataset() -> Dataset {
    Dataset::from_records(vec![
        record("Toy Story (1995)", "Animation|Children's|Comedy", 4.0, 25, 1995),
        record("Toy Story (1995)", "Animation|Children's|Comedy", 5.0, 16, 1995),
        record("Heat (1995)", "Action|Crime|Thriller", 5.0, 31, 1995),
        record("Casablanca (1942)", "Drama|Romance", 5.0, 70, 1942),
        record("Casablanca (1942)", "Drama|Romance", 4.0, 45, 1942),
        record("Jaws (1975)", "Action|Horror", 3.0, 20, 1975),
    ])
    .unwrap()
}

fn selection(labels: &[&str]) -> FacetSelection {
    FacetSelection::new(labels.iter().map(|s| s.to_string()).collect())
}

// ---------------------------------------------------------------------------
// Genre breakdown
// ---------------------------------------------------------------------------

#[test]
fn breakdown_requires_a_selection() {
    let dataset = test_dataset();
    let result = genre_breakdown(&dataset, &selection(&[]), DisplayMode::Counts);
    assert!(matches!(result, Err(ViewError::MissingSelection(_))));
}

#[test]
fn breakdown_select_all_matches_explicit_full_list() {
    let dataset = test_dataset();

    let via_sentinel =
        genre_breakdown(&dataset, &selection(&[SELECT_ALL]), DisplayMode::Counts).unwrap();
    let explicit_labels: Vec<&str> = dataset
        .genre_options()
        .iter()
        .map(|s| s.as_str())
        .collect();
    let via_explicit =
        genre_breakdown(&dataset, &selection(&explicit_labels), DisplayMode::Counts).unwrap();

    let pairs = |view: &views::GenreBreakdown| -> Vec<(String, u64)> {
        view.rows
            .iter()
            .map(|row| (row.genre.clone(), row.count))
            .collect()
    };
    assert_eq!(pairs(&via_sentinel), pairs(&via_explicit));
}

#[test]
fn breakdown_rows_follow_selection_order() {
    let dataset = test_dataset();
    let view =
        genre_breakdown(&dataset, &selection(&["Drama", "Action"]), DisplayMode::Counts).unwrap();

    let genres: Vec<&str> = view.rows.iter().map(|row| row.genre.as_str()).collect();
    assert_eq!(genres, vec!["Drama", "Action"]);
    assert_eq!(view.rows[0].count, 2);
    assert_eq!(view.rows[1].count, 2);
}

#[test]
fn breakdown_percentages_normalize_to_one_hundred() {
    let dataset = test_dataset();
    let view =
        genre_breakdown(&dataset, &selection(&[SELECT_ALL]), DisplayMode::Percentages).unwrap();

    let sum: f64 = view.rows.iter().map(|row| row.percent.unwrap()).sum();
    assert!((sum - 100.0).abs() <= 0.01 * view.rows.len() as f64);
}

#[test]
fn breakdown_unknown_genres_are_no_data() {
    let dataset = test_dataset();
    let result = genre_breakdown(&dataset, &selection(&["Bollywood"]), DisplayMode::Counts);
    assert!(matches!(result, Err(ViewError::NoData(_))));
}

#[test]
fn breakdown_chart_uses_selection_order() {
    let dataset = test_dataset();
    let view =
        genre_breakdown(&dataset, &selection(&["Horror", "Comedy"]), DisplayMode::Counts).unwrap();

    let chart = view.chart_spec();
    assert_eq!(chart.categories, vec!["Horror", "Comedy"]);
    assert_eq!(chart.values, vec![1.0, 2.0]);
}

// ---------------------------------------------------------------------------
// Satisfaction by genre
// ---------------------------------------------------------------------------

#[test]
fn satisfaction_prompts_when_both_facets_empty() {
    let dataset = test_dataset();
    let result = satisfaction_by_genre(&dataset, &selection(&[]), &selection(&[]));
    assert!(matches!(result, Err(ViewError::MissingSelection(_))));
}

#[test]
fn satisfaction_single_nonempty_facet_applies_alone() {
    let dataset = test_dataset();

    // Only the 70-year-old's Casablanca rating survives the age facet
    let view = satisfaction_by_genre(&dataset, &selection(&["66+"]), &selection(&[])).unwrap();

    assert_eq!(view.rows.len(), 2);
    for row in &view.rows {
        assert!(row.genre == "Drama" || row.genre == "Romance");
        assert_eq!(row.avg_rating, 5.0);
        assert_eq!(row.num_ratings, 1);
    }
}

#[test]
fn satisfaction_facets_combine_as_and() {
    let dataset = test_dataset();
    let view =
        satisfaction_by_genre(&dataset, &selection(&["18–24"]), &selection(&["1970s"])).unwrap();

    // Only Jaws (age 20, 1975) survives; ties keep exploded-row order
    let genres: Vec<&str> = view.rows.iter().map(|row| row.genre.as_str()).collect();
    assert_eq!(genres, vec!["Action", "Horror"]);
}

#[test]
fn satisfaction_rows_sorted_ascending_by_mean() {
    let dataset = test_dataset();
    let view =
        satisfaction_by_genre(&dataset, &selection(&[SELECT_ALL]), &selection(&[])).unwrap();

    for pair in view.rows.windows(2) {
        assert!(pair[0].avg_rating <= pair[1].avg_rating);
    }
}

#[test]
fn satisfaction_empty_result_short_circuits() {
    let dataset = test_dataset();

    // Nobody aged 66+ rated a 1970s movie
    let result = satisfaction_by_genre(&dataset, &selection(&["66+"]), &selection(&["1970s"]));
    assert!(matches!(result, Err(ViewError::NoData(_))));
}

#[test]
fn satisfaction_select_all_ages_matches_explicit_list() {
    let dataset = test_dataset();

    let all_ages = [
        "<18", "18–24", "25–34", "35–44", "45–49", "50–55", "56–65", "66+",
    ];
    let via_sentinel =
        satisfaction_by_genre(&dataset, &selection(&[SELECT_ALL]), &selection(&[])).unwrap();
    let via_explicit =
        satisfaction_by_genre(&dataset, &selection(&all_ages), &selection(&[])).unwrap();

    assert_eq!(via_sentinel.rows.len(), via_explicit.rows.len());
    for (a, b) in via_sentinel.rows.iter().zip(via_explicit.rows.iter()) {
        assert_eq!(a.genre, b.genre);
        assert_eq!(a.num_ratings, b.num_ratings);
    }
}

// ---------------------------------------------------------------------------
// Rating trend
// ---------------------------------------------------------------------------

#[test]
fn trend_empty_selection_means_no_filter() {
    let dataset = test_dataset();
    let view = rating_trend(&dataset, &selection(&[])).unwrap();

    let years: Vec<u16> = view.points.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![1942, 1975, 1995]);

    assert_eq!(view.points[0].avg_rating, 4.5);
    assert_eq!(view.points[1].avg_rating, 3.0);
    assert!((view.points[2].avg_rating - 14.0 / 3.0).abs() < 1e-9);
}

#[test]
fn trend_respects_decade_selection() {
    let dataset = test_dataset();
    let view = rating_trend(&dataset, &selection(&["1990s"])).unwrap();

    assert_eq!(view.points.len(), 1);
    assert_eq!(view.points[0].year, 1995);
    assert_eq!(view.points[0].num_ratings, 3);
}

#[test]
fn trend_unmatched_decade_is_no_data() {
    let dataset = test_dataset();
    let result = rating_trend(&dataset, &selection(&["1920s"]));
    assert!(matches!(result, Err(ViewError::NoData(_))));
}

#[test]
fn trend_chart_pins_rating_axis() {
    let dataset = test_dataset();
    let chart = rating_trend(&dataset, &selection(&[])).unwrap().chart_spec();
    assert_eq!(chart.value_range, Some((1.0, 5.0)));
}

// ---------------------------------------------------------------------------
// Top movies
// ---------------------------------------------------------------------------

#[test]
fn top_movies_ranks_by_mean_with_stable_ties() {
    let dataset = test_dataset();
    let view = top_movies(&dataset, 1).unwrap();

    let titles: Vec<&str> = view.rows.iter().map(|row| row.title.as_str()).collect();
    // Toy Story and Casablanca tie at 4.5; Toy Story appears first in the
    // base table so it stays first.
    assert_eq!(
        titles,
        vec![
            "Heat (1995)",
            "Toy Story (1995)",
            "Casablanca (1942)",
            "Jaws (1975)",
        ]
    );
}

#[test]
fn top_movies_threshold_drops_thin_support() {
    let dataset = test_dataset();
    let view = top_movies(&dataset, 2).unwrap();

    // Only the twice-rated movies qualify, ranked by mean
    let titles: Vec<&str> = view.rows.iter().map(|row| row.title.as_str()).collect();
    assert_eq!(titles, vec!["Toy Story (1995)", "Casablanca (1942)"]);
}

#[test]
fn top_movies_without_qualifiers_is_no_data() {
    let dataset = test_dataset();
    let result = top_movies(&dataset, 100);
    assert!(matches!(result, Err(ViewError::NoData(_))));
}
