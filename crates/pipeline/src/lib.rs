//! Post-processing pipeline for title suggestions.
//!
//! This crate provides:
//! - Filter trait and implementations for suggestion lists
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! A suggestion capability may be non-deterministic (a generative model) and
//! may return blanks, near-duplicates or more titles than asked for. The
//! pipeline cleans its output in stages:
//! 1. Trim whitespace and drop empty titles
//! 2. Drop case-insensitive duplicates, keeping the first
//! 3. Cap the list length
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::FilterPipeline;
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(TrimFilter)
//!     .add_filter(DedupFilter)
//!     .add_filter(LimitFilter::new(5));
//!
//! let cleaned = pipeline.apply(raw_suggestions, &query)?;
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
