use analytics::FacetSelection;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::Dataset;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use views::{
    genre_breakdown, rating_trend, satisfaction_by_genre, top_movies, ChartSpec, DisplayMode,
    GenreBreakdown, GenreSatisfaction, RatingTrend, TopMovies, ViewError, DEFAULT_THRESHOLDS,
    TOP_LIMIT,
};

/// movie-insights - Movie ratings analytics
#[derive(Parser)]
#[command(name = "movie-insights")]
#[command(about = "Interactive-style analytics over a movie-ratings dataset", long_about = None)]
struct Cli {
    /// Path to the ratings CSV file
    #[arg(short, long, default_value = "movie_ratings.csv")]
    data: PathBuf,

    /// Emit the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Emit the chart specification as JSON (views without a chart form
    /// fall back to the plain JSON result)
    #[arg(long)]
    chart: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breakdown of genres by number of ratings
    GenreBreakdown {
        /// Genre labels, comma separated ("Select All" accepted)
        #[arg(long, value_delimiter = ',')]
        genres: Vec<String>,

        /// Show data as counts or percentages
        #[arg(long, value_enum, default_value_t = ModeArg::Counts)]
        mode: ModeArg,
    },

    /// Average rating per genre after age-group and decade filters
    Satisfaction {
        /// Age group labels, comma separated ("Select All" accepted)
        #[arg(long, value_delimiter = ',')]
        ages: Vec<String>,

        /// Decade labels like 1990s, comma separated ("Select All" accepted)
        #[arg(long, value_delimiter = ',')]
        decades: Vec<String>,
    },

    /// Mean rating across movie release years
    Trend {
        /// Decade labels like 1990s, comma separated; empty means all decades
        #[arg(long, value_delimiter = ',')]
        decades: Vec<String>,
    },

    /// Best-rated movies above a minimum ratings count
    TopMovies {
        /// Minimum number of ratings; omit to show both the 50 and 150 tables
        #[arg(long)]
        min_ratings: Option<u64>,
    },
}

/// clap-facing mirror of the view-layer display mode
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Counts,
    Percentages,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Counts => DisplayMode::Counts,
            ModeArg::Percentages => DisplayMode::Percentages,
        }
    }
}

/// How a view result is written to stdout
#[derive(Clone, Copy)]
enum OutputMode {
    Table,
    Json,
    Chart,
}

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = if cli.chart {
        OutputMode::Chart
    } else if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Table
    };
    let quiet = !matches!(output, OutputMode::Table);

    // Load the dataset (once; every view reads from the same handle)
    if !quiet {
        println!("Loading ratings dataset from {}...", cli.data.display());
    }
    let start = Instant::now();
    let dataset =
        Dataset::load_from_csv(&cli.data).context("Failed to load ratings dataset")?;
    if !quiet {
        println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());
    }

    // Dispatch to the appropriate view handler
    match cli.command {
        Commands::GenreBreakdown { genres, mode } => {
            handle_genre_breakdown(&dataset, genres, mode.into(), output)?
        }
        Commands::Satisfaction { ages, decades } => {
            handle_satisfaction(&dataset, ages, decades, output)?
        }
        Commands::Trend { decades } => handle_trend(&dataset, decades, output)?,
        Commands::TopMovies { min_ratings } => {
            handle_top_movies(&dataset, min_ratings, output)?
        }
    }

    Ok(())
}

type ChartFn<T> = fn(&T) -> ChartSpec;

/// Shared guard handling: view results render, guard outcomes print their
/// message as a prompt (exit 0), invalid selections bubble up as errors.
fn render_outcome<T: Serialize>(
    result: views::Result<T>,
    output: OutputMode,
    chart_fn: Option<ChartFn<T>>,
    render_table: impl FnOnce(&T),
) -> Result<()> {
    match result {
        Ok(view) => {
            match output {
                OutputMode::Table => render_table(&view),
                OutputMode::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputMode::Chart => match chart_fn {
                    Some(spec) => println!("{}", serde_json::to_string_pretty(&spec(&view))?),
                    None => println!("{}", serde_json::to_string_pretty(&view)?),
                },
            }
            Ok(())
        }
        Err(ViewError::MissingSelection(message)) => {
            println!("{}", message.yellow());
            Ok(())
        }
        Err(ViewError::NoData(message)) => {
            println!("{}", message.cyan());
            Ok(())
        }
        Err(err @ ViewError::InvalidSelection(_)) => Err(err.into()),
    }
}

/// Handle the 'genre-breakdown' command
fn handle_genre_breakdown(
    dataset: &Dataset,
    genres: Vec<String>,
    mode: DisplayMode,
    output: OutputMode,
) -> Result<()> {
    let result = genre_breakdown(dataset, &FacetSelection::new(genres), mode);
    render_outcome(result, output, Some(|view: &GenreBreakdown| view.chart_spec()), |view| {
        println!(
            "{}",
            "Breakdown of Movie Genres by Number of Ratings:".bold().blue()
        );
        for row in &view.rows {
            match row.percent {
                Some(percent) => {
                    println!("  {:<14} {:>8}  {:>6.2}%", row.genre, row.count, percent)
                }
                None => println!("  {:<14} {:>8}", row.genre, row.count),
            }
        }
    })
}

/// Handle the 'satisfaction' command
fn handle_satisfaction(
    dataset: &Dataset,
    ages: Vec<String>,
    decades: Vec<String>,
    output: OutputMode,
) -> Result<()> {
    let result = satisfaction_by_genre(
        dataset,
        &FacetSelection::new(ages),
        &FacetSelection::new(decades),
    );
    render_outcome(
        result,
        output,
        Some(|view: &GenreSatisfaction| view.chart_spec()),
        |view| {
            println!(
                "{}",
                "Highest Viewer Satisfaction (By Genres):".bold().blue()
            );
            for row in &view.rows {
                println!(
                    "  {:<14} avg {:.2} ({} ratings)",
                    row.genre, row.avg_rating, row.num_ratings
                );
            }
        },
    )
}

/// Handle the 'trend' command
fn handle_trend(dataset: &Dataset, decades: Vec<String>, output: OutputMode) -> Result<()> {
    let result = rating_trend(dataset, &FacetSelection::new(decades));
    render_outcome(
        result,
        output,
        Some(|view: &RatingTrend| view.chart_spec()),
        |view| {
            println!("{}", "Mean Rating Across Movie Release Years:".bold().blue());
            for point in &view.points {
                println!(
                    "  {}  {:.2} ({} ratings)",
                    point.year, point.avg_rating, point.num_ratings
                );
            }
        },
    )
}

/// Handle the 'top-movies' command
///
/// With no explicit threshold, both standard tables are shown, like the
/// interactive surface does.
fn handle_top_movies(
    dataset: &Dataset,
    min_ratings: Option<u64>,
    output: OutputMode,
) -> Result<()> {
    let thresholds: Vec<u64> = match min_ratings {
        Some(threshold) => vec![threshold],
        None => DEFAULT_THRESHOLDS.to_vec(),
    };

    if matches!(output, OutputMode::Table) {
        println!("{}", format!("Top {TOP_LIMIT} Best-Rated Movies").bold().blue());
    }
    for threshold in thresholds {
        let result = top_movies(dataset, threshold);
        render_outcome(result, output, None::<ChartFn<TopMovies>>, |view| {
            println!("{}", format!("At least {} ratings:", view.min_ratings).bold());
            for (rank, row) in view.rows.iter().enumerate() {
                println!(
                    "{}. {} - avg {:.2} ({} ratings)",
                    (rank + 1).to_string().green(),
                    row.title,
                    row.avg_rating,
                    row.num_ratings
                );
            }
        })?;
    }
    Ok(())
}
