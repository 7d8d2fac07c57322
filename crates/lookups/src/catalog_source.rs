//! Catalog Source - lookups over a local movie catalog
//!
//! Ratings and cast come from an exact (case-insensitive) title match.
//! A title that is not in the catalog is answered successfully with every
//! field unknown, so the aggregate shows "N/A" instead of failing.

use async_trait::async_trait;
use catalog::{CatalogEntry, MAX_SUGGESTIONS, MovieCatalog};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::traits::{Lookup, LookupError};
use crate::types::{
    CastResponse, ImdbRatingResponse, RottenTomatoesResponse, SuggestionRequest,
    SuggestionResponse, TitleRequest,
};

/// Catalog-backed backend implementing all four capabilities
#[derive(Clone)]
pub struct CatalogLookups {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<MovieCatalog>,

    /// Maximum number of suggestions to return
    suggestion_limit: usize,
}

impl CatalogLookups {
    pub fn new(catalog: Arc<MovieCatalog>) -> Self {
        Self {
            catalog,
            suggestion_limit: MAX_SUGGESTIONS,
        }
    }

    /// Configure the suggestion limit (default: 5, never above 5)
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit.min(MAX_SUGGESTIONS);
        self
    }

    fn entry(&self, request: &TitleRequest) -> Option<&CatalogEntry> {
        let entry = self.catalog.get_by_title(&request.movie_title);
        if entry.is_none() {
            debug!("{:?} not in catalog", request.movie_title);
        }
        entry
    }
}

#[async_trait]
impl Lookup<TitleRequest, ImdbRatingResponse> for CatalogLookups {
    fn name(&self) -> &str {
        "catalog:imdb"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<ImdbRatingResponse, LookupError> {
        Ok(ImdbRatingResponse {
            imdb_rating: self.entry(&request).and_then(|e| e.imdb_rating.clone()),
        })
    }
}

#[async_trait]
impl Lookup<TitleRequest, RottenTomatoesResponse> for CatalogLookups {
    fn name(&self) -> &str {
        "catalog:rotten-tomatoes"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<RottenTomatoesResponse, LookupError> {
        Ok(RottenTomatoesResponse {
            rotten_tomatoes_rating: self
                .entry(&request)
                .and_then(|e| e.rotten_tomatoes_rating.clone()),
        })
    }
}

#[async_trait]
impl Lookup<TitleRequest, CastResponse> for CatalogLookups {
    fn name(&self) -> &str {
        "catalog:cast"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<CastResponse, LookupError> {
        let entry = self.entry(&request);
        Ok(CastResponse {
            lead_actor: entry.and_then(|e| e.lead_actor.clone()),
            lead_actress: entry.and_then(|e| e.lead_actress.clone()),
        })
    }
}

#[async_trait]
impl Lookup<SuggestionRequest, SuggestionResponse> for CatalogLookups {
    fn name(&self) -> &str {
        "catalog:suggestions"
    }

    #[instrument(skip(self), fields(query = %request.query))]
    async fn lookup(&self, request: SuggestionRequest) -> Result<SuggestionResponse, LookupError> {
        Ok(SuggestionResponse {
            suggestions: self
                .catalog
                .suggest_titles(&request.query, self.suggestion_limit),
        })
    }
}
