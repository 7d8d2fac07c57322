//! The lookup capability abstraction.
//!
//! A capability answers one structured question about a movie. The
//! aggregator and suggestion provider only ever see `dyn Lookup<Req, Resp>`,
//! so rule-based, catalog-backed and generative implementations are
//! interchangeable.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::types::{
    CastResponse, ImdbRatingResponse, RottenTomatoesResponse, SuggestionRequest,
    SuggestionResponse, TitleRequest,
};

/// Faults raised by a capability.
///
/// A successful response with missing fields is *not* an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{lookup} lookup failed: {reason}")]
    Failed { lookup: String, reason: String },

    #[error("{lookup} returned an invalid response: {reason}")]
    InvalidResponse { lookup: String, reason: String },

    #[error("{lookup} is unavailable: {reason}")]
    Unavailable { lookup: String, reason: String },
}

impl LookupError {
    pub fn failed(lookup: impl Into<String>, reason: impl ToString) -> Self {
        Self::Failed {
            lookup: lookup.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unavailable(lookup: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unavailable {
            lookup: lookup.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_response(lookup: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidResponse {
            lookup: lookup.into(),
            reason: reason.to_string(),
        }
    }
}

/// Core trait for lookup capabilities.
///
/// ## Design Note
/// - `Send + Sync` so one instance can serve concurrent requests behind an `Arc`
/// - The request is taken by value; implementations own what they send
#[async_trait]
pub trait Lookup<Req, Resp>: Send + Sync
where
    Req: Send + 'static,
{
    /// Returns the name of this capability (for logging/errors)
    fn name(&self) -> &str;

    /// Answer one request
    async fn lookup(&self, request: Req) -> Result<Resp, LookupError>;
}

pub type ImdbLookup = dyn Lookup<TitleRequest, ImdbRatingResponse>;
pub type RottenTomatoesLookup = dyn Lookup<TitleRequest, RottenTomatoesResponse>;
pub type CastLookup = dyn Lookup<TitleRequest, CastResponse>;
pub type SuggestionLookup = dyn Lookup<SuggestionRequest, SuggestionResponse>;

/// The four capabilities one backend provides
#[derive(Clone)]
pub struct LookupSet {
    pub imdb: Arc<ImdbLookup>,
    pub rotten_tomatoes: Arc<RottenTomatoesLookup>,
    pub cast: Arc<CastLookup>,
    pub suggestions: Arc<SuggestionLookup>,
}

impl LookupSet {
    /// Share a single backend that implements every capability
    pub fn from_backend<B>(backend: B) -> Self
    where
        B: Lookup<TitleRequest, ImdbRatingResponse>
            + Lookup<TitleRequest, RottenTomatoesResponse>
            + Lookup<TitleRequest, CastResponse>
            + Lookup<SuggestionRequest, SuggestionResponse>
            + 'static,
    {
        let backend = Arc::new(backend);
        Self {
            imdb: backend.clone(),
            rotten_tomatoes: backend.clone(),
            cast: backend.clone(),
            suggestions: backend,
        }
    }

    /// Names of the capabilities, in a fixed order (for logging)
    pub fn names(&self) -> [&str; 4] {
        [
            self.imdb.name(),
            self.rotten_tomatoes.name(),
            self.cast.name(),
            self.suggestions.name(),
        ]
    }
}

impl std::fmt::Debug for LookupSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupSet")
            .field("capabilities", &self.names())
            .finish()
    }
}
