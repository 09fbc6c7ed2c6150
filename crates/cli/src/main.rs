use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use analytics::{AnalyticsSnapshot, InteractionEvent};
use catalog::{Catalog, MovieRecord};
use recommender::RecommendationResult;
use server::StreamService;

/// StreamNexus - content-based movie recommendations
#[derive(Parser)]
#[command(name = "streamnexus")]
#[command(about = "Genre-overlap movie recommendations and usage analytics", long_about = None)]
struct Cli {
    /// Path to the movie catalog (.csv or .dat)
    #[arg(short, long, default_value = "data/movies.csv")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Title to base recommendations on (case-insensitive exact match)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Show why each movie was recommended
        #[arg(long)]
        explain: bool,
    },

    /// Search for movies by title
    Search {
        /// Text to look for (case-insensitive substring match)
        #[arg(long)]
        query: String,

        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// List movies, optionally filtered by genre
    Movies {
        /// Only movies with this genre
        #[arg(long)]
        genre: Option<String>,

        /// Skip movies with this genre
        #[arg(long)]
        exclude: Option<String>,

        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Explain the overlap between two genre strings
    Explain {
        /// Genres of the movie the user liked, e.g. "Action|Sci-Fi"
        #[arg(long)]
        source: String,

        /// Genres of the recommended movie
        #[arg(long)]
        candidate: String,
    },

    /// Run concurrent recommend + log requests and report latencies
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        // Explaining needs no catalog
        Commands::Explain { source, candidate } => {
            println!("{}", recommender::explain(&source, &candidate));
        }
        Commands::Recommend {
            title,
            limit,
            explain,
        } => handle_recommend(&load_service(&cli.catalog)?, &title, limit, explain),
        Commands::Search { query, limit } => {
            let movies = load_service(&cli.catalog)?.search(&query, limit);
            print_movies(&format!("Search results for '{}':", query), &movies);
        }
        Commands::Movies {
            genre,
            exclude,
            limit,
        } => {
            let movies = load_service(&cli.catalog)?.browse(genre.as_deref(), exclude.as_deref(), limit);
            print_movies("Movies:", &movies);
        }
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(load_service(&cli.catalog)?, requests, concurrent).await?,
    }

    Ok(())
}

/// Load the catalog and wrap it in a service
fn load_service(path: &Path) -> Result<StreamService> {
    println!("Loading movie catalog from {}...", path.display());
    let start = Instant::now();
    let catalog = Catalog::load_from_file(path).context("Failed to load movie catalog")?;
    debug!("Catalog indexed in {:?}", start.elapsed());
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );
    Ok(StreamService::new(Arc::new(catalog)))
}

/// Handle the 'recommend' command
fn handle_recommend(service: &StreamService, title: &str, limit: usize, explain: bool) {
    let matches = service.lookup_by_title(title);
    match matches.first() {
        None => {
            println!("{} No movie titled '{}'", "✗".red(), title);
            return;
        }
        Some(source) if matches.len() > 1 => {
            warn!(count = matches.len(), source_id = %source.id, "Ambiguous title {:?}", title);
            println!(
                "{} {} movies are titled '{}', using id {}",
                "!".yellow(),
                matches.len(),
                title,
                source.id
            );
        }
        Some(_) => {}
    }

    let result = service.recommend(title, Some(limit));
    print_recommendations(&result, explain);
}

/// Handle the 'benchmark' command
async fn handle_benchmark(service: StreamService, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 || concurrent == 0 {
        bail!("requests and concurrent must both be positive");
    }
    if service.catalog().is_empty() {
        bail!("catalog is empty, nothing to benchmark");
    }

    // Pick random source titles up front
    let titles: Vec<String> = {
        let mut rng = rand::rng();
        (0..requests)
            .filter_map(|_| service.catalog().all().choose(&mut rng))
            .map(|movie| movie.title.clone())
            .collect()
    };

    info!(requests, concurrent, "Starting benchmark");
    let semaphore = Arc::new(Semaphore::new(concurrent));
    let wall_clock = Instant::now();

    let mut handles = vec![];
    for title in titles {
        let service = service.clone();
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            let result = service.recommend(&title, None);
            for rec in &result.recommendations {
                let genres = rec.movie.genres_joined();
                service.log_event(InteractionEvent::new(rec.movie.title.clone(), Some(genres.as_str())));
            }
            drop(permit);
            start.elapsed()
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(handles.len());
    for handle in handles {
        timings.push(handle.await?);
    }
    let total_time = wall_clock.elapsed();
    info!("Benchmark finished in {:?}", total_time);

    timings.sort();
    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / timings.len() as u32;
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    print_analytics(&service.analytics());
    Ok(())
}

fn print_movies(header: &str, movies: &[MovieRecord]) {
    println!("{}", header.bold().blue());
    if movies.is_empty() {
        println!("  (none)");
    }
    for movie in movies {
        println!("{}: {} [{}]", movie.id, movie.title, movie.genres.join(", "));
    }
}

/// Helper function to format and print recommendations
fn print_recommendations(result: &RecommendationResult, explain: bool) {
    println!(
        "{}",
        format!("Because you watched '{}':", result.source_title).bold().blue()
    );
    if result.is_empty() {
        println!("  (no recommendations)");
    }
    for (i, rec) in result.recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}]",
            (i + 1).to_string().green(),
            rec.movie.title,
            rec.movie.genres.join(", ")
        );
        if explain {
            println!("   {}", rec.explanation.italic());
        }
    }
}

fn print_analytics(snapshot: &AnalyticsSnapshot) {
    println!("{}", "Analytics:".bold().blue());
    println!("Total interactions: {}", snapshot.total_interactions);
    println!("Top movies:");
    for entry in &snapshot.top_movies {
        println!("  {}Views: {} - {}", "• ".cyan(), entry.count, entry.name);
    }
    println!("Top genres:");
    for entry in &snapshot.top_genres {
        println!("  {}Count: {} - {}", "• ".cyan(), entry.count, entry.name);
    }
}
