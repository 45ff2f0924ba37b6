//! ReviewPulse Analysis
//!
//! Turns already-fetched texts about a person into a condensed sentiment
//! profile: an average polarity, a thematic summary and a ranked shortlist
//! of the most polarizing reviews.
//!
//! Components:
//! - [`QuestionClassifier`]: drops inquiries that carry no experience
//! - [`normalize`]: cleaning and lemmatization for theme extraction
//! - [`ThemeSummarizer`]: most frequent meaningful lemmas across the corpus
//! - [`SentimentScorer`]: pluggable (polarity, subjectivity) scoring
//! - [`PolarizationRanker`]: threshold filter plus polarization ranking
//! - [`AggregateAnalyzer`]: runs the whole pipeline

pub mod analyzer;
pub mod config;
pub mod intake;
pub mod normalize;
pub mod question;
pub mod ranker;
pub mod scorer;
pub mod themes;

pub use analyzer::{weighted_average_polarity, AggregateAnalyzer};
pub use config::{AnalysisConfig, ScorerConfig};
pub use intake::prepare_texts;
pub use question::QuestionClassifier;
pub use ranker::{select_most_polarizing, PolarizationRanker};
pub use scorer::{LexiconScorer, SentimentScorer};
pub use themes::{ThemeSummarizer, NO_THEMES};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::AggregateAnalyzer;
    pub use crate::config::AnalysisConfig;
    pub use crate::question::QuestionClassifier;
    pub use crate::ranker::PolarizationRanker;
    pub use crate::scorer::{LexiconScorer, SentimentScorer};
    pub use crate::themes::ThemeSummarizer;
    pub use reviewpulse_core::prelude::*;
}
