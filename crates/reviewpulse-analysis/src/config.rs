//! Configuration for the analysis pipeline

use crate::ranker::{DEFAULT_MIN_ABS_POLARITY, DEFAULT_MIN_SUBJECTIVITY};
use crate::scorer::DEFAULT_MAX_CHARS;
use crate::themes::DEFAULT_TOP_N;
use reviewpulse_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tunables for one analyzer instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of polarizing reviews in the final report (0 = all)
    #[serde(default = "default_top_k")]
    pub top_k_polarizing: usize,

    /// Minimum |polarity| for a review to be ranked
    #[serde(default = "default_min_abs_polarity")]
    pub min_abs_polarity: f64,

    /// Minimum subjectivity for a review to be ranked
    #[serde(default = "default_min_subjectivity")]
    pub min_subjectivity: f64,

    /// Number of themes in the summary
    #[serde(default = "default_theme_top_n")]
    pub theme_top_n: usize,

    /// Maximum scorer calls in flight
    #[serde(default = "default_scoring_concurrency")]
    pub scoring_concurrency: usize,

    /// Texts shorter than this after trimming are dropped by input preparation
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,

    /// Stop words added to the built-in set
    #[serde(default)]
    pub extra_stop_words: Vec<String>,

    /// Question phrases added to the built-in set
    #[serde(default)]
    pub extra_question_phrases: Vec<String>,

    /// Review-hint phrases added to the built-in set
    #[serde(default)]
    pub extra_review_hints: Vec<String>,

    /// Lexicon scorer settings
    #[serde(default)]
    pub scorer: ScorerConfig,
}

/// Lexicon scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Characters considered per text
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k_polarizing: default_top_k(),
            min_abs_polarity: default_min_abs_polarity(),
            min_subjectivity: default_min_subjectivity(),
            theme_top_n: default_theme_top_n(),
            scoring_concurrency: default_scoring_concurrency(),
            min_text_chars: default_min_text_chars(),
            extra_stop_words: Vec::new(),
            extra_question_phrases: Vec::new(),
            extra_review_hints: Vec::new(),
            scorer: ScorerConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check thresholds and limits
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_abs_polarity) {
            return Err(Error::config(format!(
                "min_abs_polarity must be within [0, 1], got {}",
                self.min_abs_polarity
            )));
        }
        if !(0.0..=1.0).contains(&self.min_subjectivity) {
            return Err(Error::config(format!(
                "min_subjectivity must be within [0, 1], got {}",
                self.min_subjectivity
            )));
        }
        if self.theme_top_n == 0 {
            return Err(Error::config("theme_top_n must be at least 1"));
        }
        if self.scoring_concurrency == 0 {
            return Err(Error::config("scoring_concurrency must be at least 1"));
        }
        if self.scorer.max_chars == 0 {
            return Err(Error::config("scorer.max_chars must be at least 1"));
        }
        Ok(())
    }
}

fn default_top_k() -> usize {
    5
}

fn default_min_abs_polarity() -> f64 {
    DEFAULT_MIN_ABS_POLARITY
}

fn default_min_subjectivity() -> f64 {
    DEFAULT_MIN_SUBJECTIVITY
}

fn default_theme_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_scoring_concurrency() -> usize {
    8
}

fn default_min_text_chars() -> usize {
    10
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}
