//! Compatible-part suggestions
//!
//! Filters a catalog against a base build with the compatibility rules, scores
//! the survivors and returns a flat top-N plus a top-N per category bucket.

mod engine;
mod scoring;
mod types;

pub use engine::{build_suggestions, SuggestionEngine};
pub use scoring::{base_score, reason, PerformanceModel, PriceProxy, ScoreCalculator};
pub use types::*;

/// Maximum suggestions in the flat view
pub const DEFAULT_FLAT_LIMIT: usize = 12;

/// Maximum suggestions per bucket
pub const DEFAULT_PER_BUCKET_LIMIT: usize = 4;

/// Score points per currency unit of price (1%)
pub const PRICE_PROXY_RATE: f64 = 0.01;
