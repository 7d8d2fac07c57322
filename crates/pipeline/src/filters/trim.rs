//! Filter to normalise whitespace and remove empty titles.
//!
//! Usually the first filter, so later filters compare clean strings.

use crate::traits::Filter;
use anyhow::Result;
use catalog::SuggestionQuery;

/// Trims every title and drops those that end up empty.
pub struct TrimFilter;

impl Filter for TrimFilter {
    fn name(&self) -> &str {
        "TrimFilter"
    }

    fn apply(&self, suggestions: Vec<String>, _query: &SuggestionQuery) -> Result<Vec<String>> {
        let filtered: Vec<String> = suggestions
            .into_iter()
            .filter_map(|title| {
                let trimmed = title.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == title.len() {
                    Some(title)
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();
        Ok(filtered)
    }
}
