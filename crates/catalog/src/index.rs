//! MovieCatalog loading and title search.
//!
//! - Load and validate a catalog file
//! - Rank titles for autocomplete (prefix matches before substring matches)

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl MovieCatalog {
    /// Load a catalog file, build the title index and validate it
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let entries = parser::parse_catalog(path)?;
        let catalog = Self::from_entries(entries);
        catalog.validate()?;

        info!("Loaded {} catalog entries", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from already-parsed entries (no validation)
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = MovieCatalog::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Validate catalog integrity
    ///
    /// Check that:
    /// - Every title is non-empty
    /// - No two titles collide case-insensitively
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            let key = entry.title.trim().to_lowercase();
            if key.is_empty() {
                return Err(CatalogError::ValidationError(
                    "catalog entry with empty title".to_string(),
                ));
            }
            if !seen.insert(key) {
                return Err(CatalogError::DuplicateTitle {
                    title: entry.title.clone(),
                });
            }
        }
        Ok(())
    }

    /// Titles matching a partial query, best matches first.
    ///
    /// Prefix matches come before substring matches; within each group the
    /// catalog order is kept. Matching is case-insensitive.
    pub fn suggest_titles(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        // (is_prefix, title); indexed par_iter keeps catalog order on collect
        let mut matches: Vec<(bool, &str)> = self
            .entries
            .par_iter()
            .filter_map(|entry| {
                let lower = entry.title.to_lowercase();
                if lower.starts_with(&needle) {
                    Some((true, entry.title.as_str()))
                } else if lower.contains(&needle) {
                    Some((false, entry.title.as_str()))
                } else {
                    None
                }
            })
            .collect();

        // Stable sort: prefix group first, order within groups unchanged
        matches.sort_by_key(|&(is_prefix, _)| !is_prefix);
        matches.truncate(limit);

        debug!("Catalog matched {} titles for {:?}", matches.len(), query);
        matches.into_iter().map(|(_, t)| t.to_string()).collect()
    }
}
