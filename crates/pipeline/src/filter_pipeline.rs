//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{DedupFilter, LimitFilter, TrimFilter};
use crate::traits::Filter;
use anyhow::Result;
use catalog::{MAX_SUGGESTIONS, SuggestionQuery};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TrimFilter)
///     .add_filter(DedupFilter)
///     .add_filter(LimitFilter::new(5));
///
/// let cleaned = pipeline.apply(suggestions, &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline every suggestion list goes through:
    /// trim -> dedup -> limit(MAX_SUGGESTIONS)
    pub fn for_suggestions() -> Self {
        Self::new()
            .add_filter(TrimFilter)
            .add_filter(DedupFilter)
            .add_filter(LimitFilter::new(MAX_SUGGESTIONS))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - The titles left after all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, suggestions: Vec<String>, query: &SuggestionQuery) -> Result<Vec<String>> {
        let mut current = suggestions;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, query)?;
            tracing::debug!(
                "{} kept {} of {} suggestions for {:?}",
                filter.name(),
                current.len(),
                before,
                query.query()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let query = SuggestionQuery::new("lord").unwrap();

        let suggestions = vec![" a ".to_string(), "".to_string()];

        let filtered = pipeline.apply(suggestions.clone(), &query).unwrap();
        assert_eq!(filtered, suggestions);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(TrimFilter);
        let query = SuggestionQuery::new("lord").unwrap();

        let suggestions = vec!["".to_string(), "Lord of War".to_string()];

        let filtered = pipeline.apply(suggestions, &query).unwrap();
        assert_eq!(filtered, vec!["Lord of War"]);
    }

    #[test]
    fn test_suggestion_pipeline_order() {
        let pipeline = FilterPipeline::for_suggestions();
        assert_eq!(
            pipeline.filter_names(),
            vec!["TrimFilter", "DedupFilter", "LimitFilter"]
        );
    }
}
