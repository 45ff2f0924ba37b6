//! Sentiment scorer trait and a lexicon fallback
//!
//! Any implementation mapping text to a bounded (polarity, subjectivity)
//! pair can drive the analyzer. Truncating overlong input is the scorer's
//! job, not the pipeline's.

use crate::normalize;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reviewpulse_core::{Result, Sentiment};
use std::collections::HashMap;

/// Default truncation bound for the lexicon scorer, in characters
pub const DEFAULT_MAX_CHARS: usize = 512;

/// Trait for all sentiment scorers
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Score the given text; empty text must score neutral
    async fn score(&self, text: &str) -> Result<Sentiment>;

    /// Get the scorer name
    fn name(&self) -> &str;
}

/// word -> (polarity, subjectivity)
static LEXICON: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    [
        ("amazing", (0.6, 0.9)),
        ("awesome", (1.0, 1.0)),
        ("best", (1.0, 0.3)),
        ("brilliant", (0.9, 1.0)),
        ("caring", (0.5, 0.6)),
        ("cared", (0.4, 0.6)),
        ("clear", (0.1, 0.4)),
        ("easy", (0.4, 0.8)),
        ("engaging", (0.5, 0.6)),
        ("excellent", (1.0, 1.0)),
        ("fair", (0.7, 0.9)),
        ("fantastic", (0.4, 0.9)),
        ("fun", (0.3, 0.2)),
        ("good", (0.7, 0.6)),
        ("great", (0.8, 0.75)),
        ("helpful", (0.5, 0.5)),
        ("interesting", (0.5, 0.5)),
        ("love", (0.5, 0.6)),
        ("loved", (0.7, 0.8)),
        ("nice", (0.6, 1.0)),
        ("passionate", (0.5, 0.8)),
        ("perfect", (1.0, 1.0)),
        ("wonderful", (1.0, 1.0)),
        ("annoying", (-0.8, 0.9)),
        ("average", (-0.15, 0.4)),
        ("awful", (-1.0, 1.0)),
        ("bad", (-0.7, 0.67)),
        ("boring", (-1.0, 1.0)),
        ("confused", (-0.4, 0.7)),
        ("confusing", (-0.3, 0.6)),
        ("difficult", (-0.5, 1.0)),
        ("disorganized", (-0.6, 0.8)),
        ("hard", (-0.3, 0.55)),
        ("hate", (-0.8, 0.9)),
        ("horrible", (-1.0, 1.0)),
        ("poor", (-0.4, 0.6)),
        ("rude", (-0.3, 0.6)),
        ("terrible", (-1.0, 1.0)),
        ("unclear", (-0.3, 0.6)),
        ("unfair", (-0.5, 0.8)),
        ("useless", (-0.5, 0.2)),
        ("worst", (-1.0, 1.0)),
    ]
    .into_iter()
    .collect()
});

/// word -> polarity multiplier for the next sentiment word
static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.3),
        ("super", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("absolutely", 1.5),
        ("pretty", 1.1),
    ]
    .into_iter()
    .collect()
});

const NEGATORS: &[&str] = &[
    "not", "never", "no", "dont", "didnt", "doesnt", "isnt", "wasnt", "cant", "wont", "hardly",
];

/// Negation flips the polarity and halves it
const NEGATION_FACTOR: f64 = -0.5;

/// Lexicon-based sentiment scorer used when no external model is wired in.
///
/// Polarity and subjectivity are the means over all matched words, after
/// applying any directly preceding intensifiers and negators.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    name: String,
    max_chars: usize,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::with_max_chars(DEFAULT_MAX_CHARS)
    }

    /// Create a scorer that only looks at the first `max_chars` characters
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            name: "sentiment-lexicon".to_string(),
            max_chars,
        }
    }

    fn score_sync(&self, text: &str) -> Result<Sentiment> {
        let text = truncate_chars(text, self.max_chars);

        let mut matched: Vec<(f64, f64)> = Vec::new();
        let mut multiplier = 1.0;
        let mut negated = false;

        for token in normalize::clean(text).split_whitespace() {
            if NEGATORS.contains(&token) {
                negated = true;
                continue;
            }
            if let Some(factor) = INTENSIFIERS.get(token) {
                multiplier *= factor;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = LEXICON.get(token) {
                let mut polarity = (polarity * multiplier).clamp(-1.0, 1.0);
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                matched.push((polarity, subjectivity));
            }

            multiplier = 1.0;
            negated = false;
        }

        if matched.is_empty() {
            return Ok(Sentiment::neutral());
        }

        let n = matched.len() as f64;
        let polarity = matched.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = matched.iter().map(|(_, s)| s).sum::<f64>() / n;

        Sentiment::clamped(polarity, subjectivity)
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentScorer for LexiconScorer {
    async fn score(&self, text: &str) -> Result<Sentiment> {
        self.score_sync(text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
