//! Demo Source - deterministic placeholder rules
//!
//! Answers every capability from hard-coded, case-insensitive substring
//! rules. Useful for running the app without a catalog file or a generation
//! service, and as a stable fixture in examples.
//!
//! ## Rules
//! - IMDb: "example" -> 7.5, "unavailable" -> unknown, otherwise 8.0
//! - Rotten Tomatoes: "hercules" -> 43%, "example" -> 92%,
//!   "unavailable" -> unknown, otherwise 78%
//! - Cast: a small table of well-known titles, otherwise unknown
//! - Suggestions: ranked matches from a built-in title list

use async_trait::async_trait;
use catalog::{CatalogEntry, MAX_SUGGESTIONS, MovieCatalog};
use tracing::debug;

use crate::traits::{Lookup, LookupError};
use crate::types::{
    CastResponse, ImdbRatingResponse, RottenTomatoesResponse, SuggestionRequest,
    SuggestionResponse, TitleRequest,
};

/// Titles the demo backend can suggest
const DEMO_TITLES: &[&str] = &[
    "Inception",
    "Iron Man",
    "Hercules",
    "The Matrix",
    "Titanic",
    "Star Wars: A New Hope",
    "Star Wars: The Empire Strikes Back",
    "Star Trek",
    "Stargate",
    "Batman Begins",
    "The Batman",
    "Batman v Superman: Dawn of Justice",
    "Battlefield Earth",
    "The Lord of the Rings: The Fellowship of the Ring",
    "The Lord of the Rings: The Two Towers",
    "The Lord of the Rings: The Return of the King",
];

/// Lead actor / actress pairs, matched by substring of the lowercased title.
/// Checked in order; the first match wins.
const DEMO_CAST: &[(&[&str], &str, &str)] = &[
    (&["inception"], "Leonardo DiCaprio", "Elliot Page"),
    (&["iron man"], "Robert Downey Jr.", "Gwyneth Paltrow"),
    (&["hercules", "disney"], "Tate Donovan (voice)", "Susan Egan (voice)"),
    (&["the matrix"], "Keanu Reeves", "Carrie-Anne Moss"),
    (&["titanic"], "Leonardo DiCaprio", "Kate Winslet"),
];

/// Placeholder backend implementing all four capabilities
pub struct DemoLookups {
    titles: MovieCatalog,
}

impl DemoLookups {
    pub fn new() -> Self {
        let titles = MovieCatalog::from_entries(
            DEMO_TITLES.iter().map(|t| CatalogEntry::titled(*t)).collect(),
        );
        Self { titles }
    }

    fn imdb_rating(title_lower: &str) -> Option<&'static str> {
        if title_lower.contains("example") {
            Some("7.5")
        } else if title_lower.contains("unavailable") {
            None
        } else {
            Some("8.0")
        }
    }

    fn rotten_tomatoes_rating(title_lower: &str) -> Option<&'static str> {
        if title_lower.contains("hercules") {
            Some("43%")
        } else if title_lower.contains("example") {
            Some("92%")
        } else if title_lower.contains("unavailable") {
            None
        } else {
            Some("78%")
        }
    }

    fn cast(title_lower: &str) -> Option<(&'static str, &'static str)> {
        DEMO_CAST
            .iter()
            .find(|(needles, _, _)| needles.iter().all(|n| title_lower.contains(n)))
            .map(|&(_, actor, actress)| (actor, actress))
    }
}

impl Default for DemoLookups {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Lookup<TitleRequest, ImdbRatingResponse> for DemoLookups {
    fn name(&self) -> &str {
        "demo:imdb"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<ImdbRatingResponse, LookupError> {
        let rating = Self::imdb_rating(&request.movie_title.to_lowercase());
        debug!("demo imdb rating for {:?}: {:?}", request.movie_title, rating);
        Ok(ImdbRatingResponse {
            imdb_rating: rating.map(String::from),
        })
    }
}

#[async_trait]
impl Lookup<TitleRequest, RottenTomatoesResponse> for DemoLookups {
    fn name(&self) -> &str {
        "demo:rotten-tomatoes"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<RottenTomatoesResponse, LookupError> {
        let rating = Self::rotten_tomatoes_rating(&request.movie_title.to_lowercase());
        debug!("demo rotten tomatoes rating for {:?}: {:?}", request.movie_title, rating);
        Ok(RottenTomatoesResponse {
            rotten_tomatoes_rating: rating.map(String::from),
        })
    }
}

#[async_trait]
impl Lookup<TitleRequest, CastResponse> for DemoLookups {
    fn name(&self) -> &str {
        "demo:cast"
    }

    async fn lookup(&self, request: TitleRequest) -> Result<CastResponse, LookupError> {
        let cast = Self::cast(&request.movie_title.to_lowercase());
        Ok(CastResponse {
            lead_actor: cast.map(|(actor, _)| actor.to_string()),
            lead_actress: cast.map(|(_, actress)| actress.to_string()),
        })
    }
}

#[async_trait]
impl Lookup<SuggestionRequest, SuggestionResponse> for DemoLookups {
    fn name(&self) -> &str {
        "demo:suggestions"
    }

    async fn lookup(&self, request: SuggestionRequest) -> Result<SuggestionResponse, LookupError> {
        Ok(SuggestionResponse {
            suggestions: self.titles.suggest_titles(&request.query, MAX_SUGGESTIONS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn imdb(title: &str) -> Option<String> {
        let response: ImdbRatingResponse = DemoLookups::new()
            .lookup(TitleRequest::new(title))
            .await
            .unwrap();
        response.imdb_rating
    }

    async fn rotten(title: &str) -> Option<String> {
        let response: RottenTomatoesResponse = DemoLookups::new()
            .lookup(TitleRequest::new(title))
            .await
            .unwrap();
        response.rotten_tomatoes_rating
    }

    #[tokio::test]
    async fn test_imdb_rules() {
        assert_eq!(imdb("An Example Movie").await.as_deref(), Some("7.5"));
        assert_eq!(imdb("Unavailable Film").await, None);
        assert_eq!(imdb("Heat").await.as_deref(), Some("8.0"));
    }

    #[tokio::test]
    async fn test_rotten_tomatoes_rules() {
        assert_eq!(rotten("Hercules").await.as_deref(), Some("43%"));
        // hercules wins over example
        assert_eq!(rotten("hercules example").await.as_deref(), Some("43%"));
        assert_eq!(rotten("EXAMPLE").await.as_deref(), Some("92%"));
        assert_eq!(rotten("unavailable").await, None);
        assert_eq!(rotten("Heat").await.as_deref(), Some("78%"));
    }

    #[tokio::test]
    async fn test_cast_table() {
        let demo = DemoLookups::new();

        let cast: CastResponse = demo.lookup(TitleRequest::new("Inception")).await.unwrap();
        assert_eq!(cast.lead_actor.as_deref(), Some("Leonardo DiCaprio"));
        assert_eq!(cast.lead_actress.as_deref(), Some("Elliot Page"));

        // Hercules needs both words
        let cast: CastResponse = demo.lookup(TitleRequest::new("Hercules")).await.unwrap();
        assert_eq!(cast, CastResponse::default());

        let cast: CastResponse = demo
            .lookup(TitleRequest::new("Disney's Hercules"))
            .await
            .unwrap();
        assert_eq!(cast.lead_actor.as_deref(), Some("Tate Donovan (voice)"));
    }

    #[tokio::test]
    async fn test_suggestions_are_capped() {
        let demo = DemoLookups::new();
        let response: SuggestionResponse = demo
            .lookup(SuggestionRequest::new("the"))
            .await
            .unwrap();

        assert!(!response.suggestions.is_empty());
        assert!(response.suggestions.len() <= MAX_SUGGESTIONS);
        assert_eq!(response.suggestions[0], "The Matrix");
    }
}
