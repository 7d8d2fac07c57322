//! Request and response records exchanged with lookup capabilities.
//!
//! Field names serialize in camelCase so a generative backend can be asked
//! for exactly these JSON shapes. Every response field is optional: a
//! capability that answers without a value means "unknown", not "failed".

use catalog::{RatingQuery, SuggestionQuery};
use serde::{Deserialize, Serialize};

/// Input for the rating and cast capabilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRequest {
    pub movie_title: String,
}

impl TitleRequest {
    pub fn new(movie_title: impl Into<String>) -> Self {
        Self {
            movie_title: movie_title.into(),
        }
    }
}

impl From<&RatingQuery> for TitleRequest {
    fn from(query: &RatingQuery) -> Self {
        Self::new(query.title())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImdbRatingResponse {
    pub imdb_rating: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RottenTomatoesResponse {
    pub rotten_tomatoes_rating: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastResponse {
    pub lead_actor: Option<String>,
    pub lead_actress: Option<String>,
}

/// Input for the suggestion capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub query: String,
}

impl SuggestionRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl From<&SuggestionQuery> for SuggestionRequest {
    fn from(query: &SuggestionQuery) -> Self {
        Self::new(query.query())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let cast: CastResponse = serde_json::from_str(r#"{"leadActor": "Keanu Reeves"}"#).unwrap();
        assert_eq!(cast.lead_actor.as_deref(), Some("Keanu Reeves"));
        assert_eq!(cast.lead_actress, None);

        let imdb: ImdbRatingResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(imdb.imdb_rating, None);

        let suggestions: SuggestionResponse = serde_json::from_str("{}").unwrap();
        assert!(suggestions.suggestions.is_empty());
    }

    #[test]
    fn test_title_request_uses_trimmed_query() {
        let query = RatingQuery::new("  Heat ").unwrap();
        let request = TitleRequest::from(&query);
        assert_eq!(request.movie_title, "Heat");

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"movieTitle":"Heat"}"#);
    }
}
