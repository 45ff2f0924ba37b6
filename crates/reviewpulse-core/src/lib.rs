//! ReviewPulse Core
//!
//! Core types and error handling shared across ReviewPulse components.
//!
//! This crate provides:
//! - Raw input texts and their origin tags
//! - Validated sentiment pairs and scored reviews
//! - The analysis report consumed as JSON by downstream tools
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{AnalysisReport, RankedReview, RawText, ScoredReview, Sentiment, TextOrigin};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{AnalysisReport, RankedReview, RawText, ScoredReview, Sentiment};
}
