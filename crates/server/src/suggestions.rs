//! # Suggestion Provider
//!
//! Autocomplete for partially typed titles. Never fails: short input, a
//! faulting lookup and a misbehaving filter all end in an empty list.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use catalog::{SuggestionQuery, SuggestionResult};
use lookups::{LookupSet, SuggestionLookup, SuggestionRequest};
use pipeline::FilterPipeline;

/// Guarded single lookup plus post-processing
#[derive(Clone)]
pub struct SuggestionProvider {
    lookup: Arc<SuggestionLookup>,
    pipeline: Arc<FilterPipeline>,
}

impl SuggestionProvider {
    pub fn new(lookups: &LookupSet) -> Self {
        Self::with_pipeline(lookups, FilterPipeline::for_suggestions())
    }

    pub fn with_pipeline(lookups: &LookupSet, pipeline: FilterPipeline) -> Self {
        Self {
            lookup: lookups.suggestions.clone(),
            pipeline: Arc::new(pipeline),
        }
    }

    /// Suggest up to five titles for a partial query
    ///
    /// Queries shorter than two characters after trimming return an empty
    /// result without calling the lookup.
    #[instrument(skip(self))]
    pub async fn fetch_suggestions(&self, query: &str) -> SuggestionResult {
        let query = match SuggestionQuery::new(query) {
            Ok(query) => query,
            Err(e) => {
                debug!("Skipping suggestion lookup: {}", e);
                return SuggestionResult::empty();
            }
        };

        let response = match self.lookup.lookup(SuggestionRequest::from(&query)).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} faulted for {:?}: {}", self.lookup.name(), query.query(), e);
                return SuggestionResult::empty();
            }
        };

        match self.pipeline.apply(response.suggestions, &query) {
            Ok(suggestions) => {
                debug!("{} suggestions for {:?}", suggestions.len(), query.query());
                SuggestionResult::new(suggestions)
            }
            Err(e) => {
                warn!("Suggestion pipeline failed for {:?}: {:#}", query.query(), e);
                SuggestionResult::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubLookup, call_count};
    use catalog::MAX_SUGGESTIONS;
    use lookups::{CastResponse, ImdbRatingResponse, RottenTomatoesResponse, SuggestionResponse};
    use pipeline::Filter;
    use std::sync::atomic::AtomicUsize;

    fn build_set(suggestions: StubLookup<SuggestionResponse>) -> LookupSet {
        LookupSet {
            imdb: Arc::new(StubLookup::ok("stub:imdb", ImdbRatingResponse::default())),
            rotten_tomatoes: Arc::new(StubLookup::ok(
                "stub:rotten-tomatoes",
                RottenTomatoesResponse::default(),
            )),
            cast: Arc::new(StubLookup::ok("stub:cast", CastResponse::default())),
            suggestions: Arc::new(suggestions),
        }
    }

    fn answering(titles: &[&str]) -> StubLookup<SuggestionResponse> {
        StubLookup::ok(
            "stub:suggestions",
            SuggestionResponse {
                suggestions: titles.iter().map(|t| t.to_string()).collect(),
            },
        )
    }

    #[tokio::test]
    async fn test_short_queries_issue_no_lookup() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = SuggestionProvider::new(&build_set(answering(&["Alien"]).counting(&calls)));

        for query in ["", " ", "a", "  b  ", "é"] {
            let result = provider.fetch_suggestions(query).await;
            assert!(result.is_empty(), "{:?} should yield nothing", query);
        }
        assert_eq!(call_count(&calls), 0);
    }

    #[tokio::test]
    async fn test_two_characters_is_enough() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = SuggestionProvider::new(&build_set(answering(&["Alien"]).counting(&calls)));

        let result = provider.fetch_suggestions(" al ").await;
        assert_eq!(result.suggestions(), ["Alien"]);
        assert_eq!(call_count(&calls), 1);
    }

    #[tokio::test]
    async fn test_fault_yields_empty_list() {
        let provider = SuggestionProvider::new(&build_set(StubLookup::failing("stub:suggestions")));

        let result = provider.fetch_suggestions("star w").await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_and_messy_answers_are_cleaned() {
        let provider = SuggestionProvider::new(&build_set(answering(&[
            " Star Wars ",
            "",
            "star wars",
            "Star Trek",
            "Stargate",
            "   ",
            "Starship Troopers",
            "Star Trek II",
            "Stardust",
            "A Star Is Born",
        ])));

        let result = provider.fetch_suggestions("star").await;
        assert_eq!(result.len(), MAX_SUGGESTIONS);
        assert_eq!(
            result.suggestions(),
            ["Star Wars", "Star Trek", "Stargate", "Starship Troopers", "Star Trek II"]
        );
        assert!(result.suggestions().iter().all(|s| !s.trim().is_empty()));
    }

    struct BrokenFilter;

    impl Filter for BrokenFilter {
        fn name(&self) -> &str {
            "Broken"
        }

        fn apply(&self, _: Vec<String>, _: &SuggestionQuery) -> anyhow::Result<Vec<String>> {
            anyhow::bail!("filter exploded")
        }
    }

    #[tokio::test]
    async fn test_pipeline_failure_yields_empty_list() {
        let provider = SuggestionProvider::with_pipeline(
            &build_set(answering(&["Alien"])),
            FilterPipeline::new().add_filter(BrokenFilter),
        );

        assert!(provider.fetch_suggestions("alien").await.is_empty());
    }
}
