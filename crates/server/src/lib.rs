//! Server crate for RateFind.
//!
//! This crate contains the rating aggregator and suggestion provider that
//! sit on top of the lookup capabilities, the two request-facing actions,
//! and the HTTP API that exposes them.

pub mod actions;
pub mod aggregator;
pub mod config;
pub mod debounce;
pub mod error;
pub mod http;
pub mod suggestions;

#[cfg(test)]
mod test_support;

pub use actions::{RatingsActionResult, fetch_ratings_action, fetch_suggestions_action};
pub use aggregator::RatingAggregator;
pub use config::{Backend, ConfigError, LookupConfig, ServerConfig};
pub use debounce::{DEFAULT_QUIET_PERIOD, Debouncer};
pub use error::RateFindError;
pub use http::{AppState, build_router};
pub use suggestions::SuggestionProvider;
