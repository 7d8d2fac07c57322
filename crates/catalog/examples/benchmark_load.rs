use catalog::{MAX_SUGGESTIONS, MovieCatalog};
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/catalog.dat");

    println!("Loading movie catalog...\n");

    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(path)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Entries: {}", catalog.len());

    let start = Instant::now();
    let titles = catalog.suggest_titles("the", MAX_SUGGESTIONS);
    println!("\nSuggestions for 'the' in {:?}:", start.elapsed());
    for title in titles {
        println!("  - {}", title);
    }
}
