//! Request-facing actions.
//!
//! These are the two operations the UI calls. They never return `Err`:
//! a failed rating fetch is reported inside the result as `{"error": ...}`
//! and a failed suggestion fetch is an empty list.

use serde::Serialize;

use catalog::{RatingResult, SuggestionResult};

use crate::aggregator::RatingAggregator;
use crate::error::RateFindError;
use crate::suggestions::SuggestionProvider;

/// `{"data": {...}}` on success, `{"error": "..."}` otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RatingsActionResult {
    Data { data: RatingResult },
    Error { error: String },
}

impl RatingsActionResult {
    pub fn data(&self) -> Option<&RatingResult> {
        match self {
            RatingsActionResult::Data { data } => Some(data),
            RatingsActionResult::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RatingsActionResult::Data { .. } => None,
            RatingsActionResult::Error { error } => Some(error),
        }
    }
}

impl From<Result<RatingResult, RateFindError>> for RatingsActionResult {
    fn from(outcome: Result<RatingResult, RateFindError>) -> Self {
        match outcome {
            Ok(data) => RatingsActionResult::Data { data },
            Err(e) => RatingsActionResult::Error {
                error: e.to_string(),
            },
        }
    }
}

pub async fn fetch_ratings_action(aggregator: &RatingAggregator, title: &str) -> RatingsActionResult {
    aggregator.fetch_ratings(title).await.into()
}

/// Serializes as `{"suggestions": [...]}`
pub async fn fetch_suggestions_action(provider: &SuggestionProvider, query: &str) -> SuggestionResult {
    provider.fetch_suggestions(query).await
}
