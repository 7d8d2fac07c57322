//! Core traits for the suggestion pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to suggestion lists.

use anyhow::Result;
use catalog::SuggestionQuery;

/// Core trait for filtering suggestions.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one pipeline to be shared across requests
/// - Filters take ownership of the Vec<String> and return a filtered Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of suggested titles.
    ///
    /// # Arguments
    /// * `suggestions` - The titles to filter (takes ownership)
    /// * `query` - The query the titles were suggested for
    fn apply(&self, suggestions: Vec<String>, query: &SuggestionQuery) -> Result<Vec<String>>;
}
