//! Filter implementations for the suggestion pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod dedup;
pub mod limit;
pub mod trim;

// Re-export for convenience
pub use dedup::DedupFilter;
pub use limit::LimitFilter;
pub use trim::TrimFilter;
