//! Filter to remove repeated titles.
//!
//! Generative backends sometimes repeat a title with different casing.

use crate::traits::Filter;
use anyhow::Result;
use catalog::SuggestionQuery;
use std::collections::HashSet;

/// Keeps the first occurrence of each title, compared case-insensitively.
///
/// ## Algorithm
/// Uses a HashSet of lowercased titles for O(1) membership checks while
/// preserving the original order.
pub struct DedupFilter;

impl Filter for DedupFilter {
    fn name(&self) -> &str {
        "DedupFilter"
    }

    fn apply(&self, suggestions: Vec<String>, _query: &SuggestionQuery) -> Result<Vec<String>> {
        let mut seen = HashSet::with_capacity(suggestions.len());
        let filtered: Vec<String> = suggestions
            .into_iter()
            .filter(|title| seen.insert(title.to_lowercase()))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_filter() {
        let query = SuggestionQuery::new("bat").unwrap();
        let suggestions = vec![
            "Batman Begins".to_string(),
            "The Batman".to_string(),
            "BATMAN BEGINS".to_string(),
            "Battlefield Earth".to_string(),
            "the batman".to_string(),
        ];

        let filtered = DedupFilter.apply(suggestions, &query).unwrap();

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0], "Batman Begins");
        assert_eq!(filtered[1], "The Batman");
        assert_eq!(filtered[2], "Battlefield Earth");
    }
}
