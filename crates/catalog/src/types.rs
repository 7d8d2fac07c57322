//! Core domain types for RateFind.
//!
//! This module defines the records that flow through the system:
//! - Validated user input (`RatingQuery`, `SuggestionQuery`)
//! - Response records (`RatingResult`, `SuggestionResult`)
//! - Catalog rows and the in-memory `MovieCatalog`

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Constants
// =============================================================================

/// Sentinel meaning "attribute unknown". Presentation code compares against
/// this exact string, so it must never be localised or reformatted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Minimum trimmed query length (in characters) before suggestions are fetched
pub const MIN_QUERY_CHARS: usize = 2;

/// Upper bound on suggestions returned to a caller
pub const MAX_SUGGESTIONS: usize = 5;

/// Collapse a possibly-missing field into its display value.
///
/// `None`, blank values and any casing of `n/a` all become `"N/A"`.
pub fn or_not_available(value: Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() && !v.eq_ignore_ascii_case(NOT_AVAILABLE) => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// True if the value is the "unknown" sentinel
pub fn is_not_available(value: &str) -> bool {
    value == NOT_AVAILABLE
}

// =============================================================================
// Queries
// =============================================================================

/// A validated movie title to fetch ratings for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingQuery {
    title: String,
}

impl RatingQuery {
    /// Trim the raw input and reject it if nothing is left
    pub fn new(raw: &str) -> Result<Self, QueryError> {
        let title = raw.trim();
        if title.is_empty() {
            return Err(QueryError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A validated partial title to fetch suggestions for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    query: String,
}

impl SuggestionQuery {
    /// Trim the raw input and require at least `MIN_QUERY_CHARS` characters.
    ///
    /// Length is counted in chars, not bytes, so "Ré" is long enough.
    pub fn new(raw: &str) -> Result<Self, QueryError> {
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Err(QueryError::QueryTooShort {
                min: MIN_QUERY_CHARS,
            });
        }
        Ok(Self {
            query: query.to_string(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

// =============================================================================
// Results
// =============================================================================

/// Merged ratings and cast for a single title.
///
/// Fields are private so a result cannot be altered after the merge; every
/// field is either a real value or `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResult {
    title: String,
    imdb_rating: String,
    rotten_tomatoes_rating: String,
    lead_actor: String,
    lead_actress: String,
}

impl RatingResult {
    pub fn new(
        title: impl Into<String>,
        imdb_rating: Option<String>,
        rotten_tomatoes_rating: Option<String>,
        lead_actor: Option<String>,
        lead_actress: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            imdb_rating: or_not_available(imdb_rating),
            rotten_tomatoes_rating: or_not_available(rotten_tomatoes_rating),
            lead_actor: or_not_available(lead_actor),
            lead_actress: or_not_available(lead_actress),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn imdb_rating(&self) -> &str {
        &self.imdb_rating
    }

    pub fn rotten_tomatoes_rating(&self) -> &str {
        &self.rotten_tomatoes_rating
    }

    pub fn lead_actor(&self) -> &str {
        &self.lead_actor
    }

    pub fn lead_actress(&self) -> &str {
        &self.lead_actress
    }

    /// False when neither rating source knew the title
    pub fn has_any_rating(&self) -> bool {
        !is_not_available(&self.imdb_rating) || !is_not_available(&self.rotten_tomatoes_rating)
    }
}

/// Ordered title suggestions, at most `MAX_SUGGESTIONS` long
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    suggestions: Vec<String>,
}

impl SuggestionResult {
    /// Build a result, dropping blank entries and anything past the cap
    pub fn new(suggestions: Vec<String>) -> Self {
        let mut suggestions: Vec<String> = suggestions
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
        suggestions.truncate(MAX_SUGGESTIONS);
        Self { suggestions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// One row of the catalog file. Unknown values are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub imdb_rating: Option<String>,
    pub rotten_tomatoes_rating: Option<String>,
    pub lead_actor: Option<String>,
    pub lead_actress: Option<String>,
}

impl CatalogEntry {
    /// Entry with only a title; every attribute unknown
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            imdb_rating: None,
            rotten_tomatoes_rating: None,
            lead_actor: None,
            lead_actress: None,
        }
    }
}

/// In-memory movie catalog with a case-insensitive title index.
///
/// Read-only once loaded; share it behind an `Arc`.
#[derive(Debug)]
pub struct MovieCatalog {
    /// Entries in file order (suggestion ranking depends on it)
    pub(crate) entries: Vec<CatalogEntry>,
    /// Lowercased title -> position in `entries`. First insert wins.
    pub(crate) title_index: HashMap<String, usize>,
}

impl MovieCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            title_index: HashMap::new(),
        }
    }

    /// Look up an entry by title, ignoring case and surrounding whitespace
    pub fn get_by_title(&self, title: &str) -> Option<&CatalogEntry> {
        let key = title.trim().to_lowercase();
        self.title_index.get(&key).map(|&idx| &self.entries[idx])
    }

    /// Insert an entry and index its title
    pub fn insert(&mut self, entry: CatalogEntry) {
        let idx = self.entries.len();
        self.title_index
            .entry(entry.title.trim().to_lowercase())
            .or_insert(idx);
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}
