//! # Lookups Crate
//!
//! Lookup capabilities: the only thing the rating aggregator and suggestion
//! provider know how to call.
//!
//! ## Components
//!
//! ### `Lookup` trait
//! `request record -> Result<response record, LookupError>`, async,
//! object-safe, shared behind `Arc<dyn Lookup<..>>`.
//!
//! ### Demo Source
//! Deterministic placeholder rules. No setup needed.
//!
//! ### Catalog Source
//! Answers from a local `MovieCatalog` file.
//!
//! A third backend, the generative one, lives in the `genai-client` crate.
//!
//! ## Example Usage
//!
//! ```ignore
//! use lookups::{CatalogLookups, DemoLookups, LookupSet, TitleRequest};
//! use catalog::MovieCatalog;
//! use std::sync::Arc;
//!
//! let demo = LookupSet::from_backend(DemoLookups::new());
//!
//! let catalog = Arc::new(MovieCatalog::load_from_file("data/catalog.dat".as_ref())?);
//! let local = LookupSet::from_backend(CatalogLookups::new(catalog));
//!
//! let imdb = local.imdb.lookup(TitleRequest::new("Inception")).await?;
//! ```

// Public modules
pub mod types;
pub mod traits;
pub mod demo;
pub mod catalog_source;

// Re-export commonly used types
pub use types::{
    CastResponse, ImdbRatingResponse, RottenTomatoesResponse, SuggestionRequest,
    SuggestionResponse, TitleRequest,
};
pub use traits::{
    CastLookup, ImdbLookup, Lookup, LookupError, LookupSet, RottenTomatoesLookup,
    SuggestionLookup,
};
pub use demo::DemoLookups;
pub use catalog_source::CatalogLookups;
