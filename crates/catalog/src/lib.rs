//! # Catalog Crate
//!
//! Domain records shared by every RateFind crate, plus an optional local
//! movie catalog that backs the `catalog` lookup backend.
//!
//! ## Main Components
//!
//! - **types**: Queries, results, the `"N/A"` sentinel, `MovieCatalog`
//! - **parser**: Parse `::`-separated catalog files
//! - **index**: Load, validate and search a catalog
//! - **error**: Error types for loading and for input validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{MovieCatalog, RatingQuery};
//! use std::path::Path;
//!
//! let catalog = MovieCatalog::load_from_file(Path::new("data/catalog.dat"))?;
//! let query = RatingQuery::new("  Inception ")?;
//!
//! if let Some(entry) = catalog.get_by_title(query.title()) {
//!     println!("{} -> {:?}", entry.title, entry.imdb_rating);
//! }
//! let titles = catalog.suggest_titles("bat", 5);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, QueryError, Result};
pub use types::{
    // Constants and helpers
    NOT_AVAILABLE,
    MIN_QUERY_CHARS,
    MAX_SUGGESTIONS,
    or_not_available,
    is_not_available,
    // Queries and results
    RatingQuery,
    RatingResult,
    SuggestionQuery,
    SuggestionResult,
    // Catalog
    CatalogEntry,
    MovieCatalog,
};
