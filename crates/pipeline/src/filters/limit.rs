//! Filter to cap the number of suggestions.

use crate::traits::Filter;
use anyhow::Result;
use catalog::SuggestionQuery;

/// Keeps at most `max` titles, in order.
pub struct LimitFilter {
    max: usize,
}

impl LimitFilter {
    /// Create a new LimitFilter.
    ///
    /// # Arguments
    /// * `max` - Maximum number of titles to keep (typically 5)
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Filter for LimitFilter {
    fn name(&self) -> &str {
        "LimitFilter"
    }

    fn apply(&self, mut suggestions: Vec<String>, _query: &SuggestionQuery) -> Result<Vec<String>> {
        suggestions.truncate(self.max);
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_filter() {
        let query = SuggestionQuery::new("the").unwrap();
        let suggestions: Vec<String> = (1..=8).map(|i| format!("The Movie {}", i)).collect();

        let filtered = LimitFilter::new(5).apply(suggestions, &query).unwrap();

        assert_eq!(filtered.len(), 5);
        assert_eq!(filtered[4], "The Movie 5");
    }

    #[test]
    fn test_limit_filter_shorter_input() {
        let query = SuggestionQuery::new("the").unwrap();
        let suggestions = vec!["The Thing".to_string()];

        let filtered = LimitFilter::new(5).apply(suggestions, &query).unwrap();

        assert_eq!(filtered, vec!["The Thing"]);
    }
}
