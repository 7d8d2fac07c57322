//! Errors surfaced by the rating fetch.

use catalog::QueryError;
use lookups::LookupError;
use thiserror::Error;

/// Why a rating fetch produced no result.
///
/// Display output is what end users see in the `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateFindError {
    /// Input rejected before any lookup ran
    #[error(transparent)]
    Validation(#[from] QueryError),

    /// One of the lookups faulted
    #[error("Failed to fetch ratings: {0}")]
    Lookup(#[from] LookupError),
}

impl RateFindError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RateFindError::Validation(_))
    }
}
