//! Example: Ask every capability of a backend about one title
//!
//! Run with: cargo run --package lookups --example run_lookups -- "The Matrix"
//!
//! Uses the catalog at data/catalog.dat when present, the demo rules otherwise.

use catalog::MovieCatalog;
use lookups::{CatalogLookups, DemoLookups, LookupSet, SuggestionRequest, TitleRequest};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,lookups=debug")
        .init();

    let title = std::env::args().nth(1).unwrap_or_else(|| "Inception".to_string());

    let path = Path::new("data/catalog.dat");
    let lookups = if path.exists() {
        println!("Using catalog backend ({})", path.display());
        let catalog = Arc::new(MovieCatalog::load_from_file(path)?);
        LookupSet::from_backend(CatalogLookups::new(catalog))
    } else {
        println!("Using demo backend");
        LookupSet::from_backend(DemoLookups::new())
    };

    let start = Instant::now();
    let request = TitleRequest::new(title.clone());
    let (imdb, rotten, cast) = tokio::join!(
        lookups.imdb.lookup(request.clone()),
        lookups.rotten_tomatoes.lookup(request.clone()),
        lookups.cast.lookup(request),
    );
    println!("\n=== {} ({:?}) ===", title, start.elapsed());
    println!("  IMDb: {:?}", imdb?.imdb_rating);
    println!("  Rotten Tomatoes: {:?}", rotten?.rotten_tomatoes_rating);
    let cast = cast?;
    println!("  Lead actor: {:?}", cast.lead_actor);
    println!("  Lead actress: {:?}", cast.lead_actress);

    let prefix: String = title.chars().take(3).collect();
    let suggestions = lookups
        .suggestions
        .lookup(SuggestionRequest::new(prefix.clone()))
        .await?;
    println!("\nSuggestions for {:?}:", prefix);
    for (i, suggestion) in suggestions.suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, suggestion);
    }

    Ok(())
}
