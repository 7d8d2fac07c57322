use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use catalog::{is_not_available, RatingResult, SuggestionResult};
use server::{
    fetch_ratings_action, fetch_suggestions_action, Backend, Debouncer, LookupConfig,
    RatingAggregator, SuggestionProvider,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Semaphore;
use tracing::warn;

/// Titles the benchmark samples from
const BENCHMARK_TITLES: &[&str] = &[
    "Inception",
    "Iron Man",
    "Hercules",
    "The Matrix",
    "Titanic",
    "Star Trek",
    "Batman Begins",
    "Heat",
    "Alien",
    "Unavailable Example",
];

/// RateFind - movie ratings, lead cast and title suggestions
#[derive(Parser)]
#[command(name = "ratefind")]
#[command(about = "Look up movie ratings, lead cast and title suggestions", long_about = None)]
struct Cli {
    /// Lookup backend: demo, catalog or genai
    #[arg(short, long, default_value = "demo")]
    backend: Backend,

    /// Catalog file used by the catalog backend
    #[arg(long, default_value = "data/catalog.dat")]
    catalog: PathBuf,

    /// Generation service address used by the genai backend
    #[arg(long, default_value = "http://localhost:50051")]
    genai_addr: String,

    /// Per-request timeout for the generation service, in milliseconds
    #[arg(long, default_value = "10000")]
    genai_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ratings and lead cast for a movie
    Ratings {
        /// Movie title
        #[arg(long)]
        title: String,
    },

    /// Suggest titles for a partial query
    Suggest {
        /// Partial title, at least two characters
        #[arg(long)]
        query: String,
    },

    /// Interactive search: type partial titles, one per line
    Search {
        /// Quiet period before a typed line is looked up
        #[arg(long, default_value = "300")]
        debounce_ms: u64,
    },

    /// Run benchmark to test performance
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
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = LookupConfig {
        backend: cli.backend,
        catalog_path: cli.catalog,
        genai_addr: cli.genai_addr,
        genai_timeout: Duration::from_millis(cli.genai_timeout_ms),
    };
    let start = Instant::now();
    let lookups = config
        .build()
        .await
        .with_context(|| format!("Failed to set up the {} backend", config.backend))?;
    println!(
        "{} {} backend ready in {:?}",
        "✓".green(),
        config.backend,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Ratings { title } => handle_ratings(RatingAggregator::new(&lookups), title).await,
        Commands::Suggest { query } => {
            handle_suggest(SuggestionProvider::new(&lookups), query).await;
            Ok(())
        }
        Commands::Search { debounce_ms } => {
            handle_search(
                SuggestionProvider::new(&lookups),
                Duration::from_millis(debounce_ms),
            )
            .await
        }
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(RatingAggregator::new(&lookups), requests, concurrent).await,
    }
}

/// Handle the 'ratings' command
async fn handle_ratings(aggregator: RatingAggregator, title: String) -> Result<()> {
    let result = fetch_ratings_action(&aggregator, &title).await;
    match (result.data(), result.error()) {
        (Some(data), _) => {
            print_rating_card(data);
            Ok(())
        }
        (None, Some(error)) => bail!("{}", error),
        (None, None) => bail!("No result for {:?}", title),
    }
}

/// Handle the 'suggest' command
async fn handle_suggest(provider: SuggestionProvider, query: String) {
    let result = fetch_suggestions_action(&provider, &query).await;
    print_suggestions(&query, &result);
}

/// Handle the 'search' command
///
/// Every line read from stdin replaces the pending query; suggestions are
/// fetched only for a query that stays unchanged for the quiet period.
async fn handle_search(provider: SuggestionProvider, quiet_period: Duration) -> Result<()> {
    println!(
        "{}",
        "Type part of a movie title and press Enter (Ctrl-D to quit)".bold().blue()
    );

    let (debouncer, mut settled) = Debouncer::new(quiet_period);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line.context("Reading stdin")? {
                Some(line) => {
                    debouncer.push(line);
                }
                None => break,
            },
            Some(query) = settled.recv() => {
                let result = provider.fetch_suggestions(&query).await;
                print_suggestions(&query, &result);
            }
        }
    }

    // Input closed: give the last line a chance to settle
    if let Ok(Some(query)) = tokio::time::timeout(quiet_period * 2, settled.recv()).await {
        let result = provider.fetch_suggestions(&query).await;
        print_suggestions(&query, &result);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    aggregator: RatingAggregator,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 || concurrent == 0 {
        bail!("--requests and --concurrent must both be at least 1");
    }

    let titles: Vec<&'static str> = (0..requests)
        .map(|_| BENCHMARK_TITLES[rand::random_range(0..BENCHMARK_TITLES.len())])
        .collect();

    // Use tokio::spawn to make concurrent requests, at most `concurrent` in flight
    let permits = Arc::new(Semaphore::new(concurrent));
    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for title in titles {
        let aggregator = aggregator.clone();
        let permits = permits.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            let outcome = aggregator.fetch_ratings(title).await;
            Ok::<_, anyhow::Error>((start.elapsed(), outcome.is_ok()))
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = Vec::with_capacity(requests);
    let mut failures = 0usize;
    for handle in handles {
        let (elapsed, ok) = handle.await??;
        if !ok {
            failures += 1;
        }
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    if failures > 0 {
        warn!("{} of {} requests failed", failures, requests);
    }

    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / (timings.len() as u32);
    timings.sort();
    let p50 = percentile(&timings, 0.50);
    let p95 = percentile(&timings, 0.95);
    let p99 = percentile(&timings, 0.99);
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent, {} failed)", requests, concurrent, failures);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Nearest-rank percentile of sorted timings
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    let rank = ((sorted.len() as f64 * p).ceil() as usize).clamp(1, sorted.len());
    sorted[rank - 1]
}

/// Helper function to format and print a rating card
fn print_rating_card(result: &RatingResult) {
    println!("{}", result.title().bold().blue());
    print_field("IMDb", result.imdb_rating());
    print_field("Rotten Tomatoes", result.rotten_tomatoes_rating());
    print_field("Lead actor", result.lead_actor());
    print_field("Lead actress", result.lead_actress());

    if !result.has_any_rating() {
        println!(
            "{}",
            "No ratings found for this title. Check the spelling or try another movie.".yellow()
        );
    }
}

fn print_field(label: &str, value: &str) {
    let value = if is_not_available(value) {
        value.dimmed()
    } else {
        value.green()
    };
    println!("{}{:<16} {}", "• ".cyan(), format!("{}:", label), value);
}

/// Helper function to format and print suggestions
fn print_suggestions(query: &str, result: &SuggestionResult) {
    if result.is_empty() {
        println!("{} {}", "No suggestions for".dimmed(), format!("{:?}", query.trim()).dimmed());
        return;
    }

    println!("{}", format!("Suggestions for {:?}:", query.trim()).bold().blue());
    for (i, title) in result.suggestions().iter().enumerate() {
        println!("{}. {}", (i + 1).to_string().green(), title);
    }
}
