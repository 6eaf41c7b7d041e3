use data_loader::Dataset;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("movie_ratings.csv");

    println!("Loading movie-ratings dataset...\n");

    let start = Instant::now();
    let dataset = Dataset::load_from_csv(path).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (rows, exploded_rows) = dataset.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Ratings: {}", rows);
    println!("Exploded rows: {}", exploded_rows);
    println!("Genres: {}", dataset.genre_options().len());
    println!("Decades: {}", dataset.decade_options().len());
    println!("\nPerformance: {:.0} rows/second",
             rows as f64 / elapsed.as_secs_f64());
}
