//! Question-vs-review heuristic
//!
//! Decides whether a text is primarily an inquiry ("Should I take him for
//! CS205?") rather than a first-person account of the subject. Question-like
//! texts carry no experiential sentiment and are dropped before scoring.
//!
//! Scoring is additive:
//! - `+1` if the text contains a question mark
//! - `+2` if the first word is a wh-word or an auxiliary-verb opener
//! - `+1` if the text contains a known question phrase
//! - `-1` if the text contains a phrase hinting at personal experience
//!
//! A text is question-like when the total reaches [`QUESTION_THRESHOLD`].

use aho_corasick::AhoCorasick;
use reviewpulse_core::{Error, Result};

/// Minimum score for a text to count as question-like
pub const QUESTION_THRESHOLD: i32 = 2;

/// Interrogative openers
pub const WH_WORDS: &[&str] = &[
    "what", "why", "how", "when", "where", "which", "who", "whom", "whose",
];

/// Auxiliary verbs that open yes/no questions
pub const AUXILIARY_OPENERS: &[&str] = &[
    "is", "are", "was", "were", "do", "does", "did", "can", "could", "should", "would", "will",
    "has", "have", "had",
];

/// Phrases typical of someone asking about the subject
pub const QUESTION_PHRASES: &[&str] = &[
    "anyone know",
    "anyone have",
    "anyone taken",
    "has anyone taken",
    "has anyone had",
    "should i take",
    "worth taking",
    "is it worth",
    "is he good",
    "is she good",
    "any advice",
    "any tips",
    "thoughts on",
    "what is he like",
    "what is she like",
    "what's he like",
    "what's she like",
    "looking for advice",
];

/// Phrases signalling a first-hand experience
pub const REVIEW_HINTS: &[&str] = &[
    "i took",
    "i had",
    "i have taken",
    "took him",
    "took her",
    "took his",
    "he taught",
    "she taught",
    "they taught",
    "graded",
    "grading",
    "curve",
    "office hours",
    "his lectures",
    "her lectures",
    "my experience",
    "i passed",
    "i failed",
];

/// Additive heuristic classifier for question-like texts
#[derive(Debug, Clone)]
pub struct QuestionClassifier {
    question_phrases: AhoCorasick,
    review_hints: AhoCorasick,
}

impl QuestionClassifier {
    /// Create a classifier with the built-in phrase sets
    pub fn new() -> Result<Self> {
        Self::with_phrases(&[], &[])
    }

    /// Create a classifier whose phrase sets extend the built-in ones
    pub fn with_phrases(
        extra_question_phrases: &[String],
        extra_review_hints: &[String],
    ) -> Result<Self> {
        let question_phrases = Self::build_matcher(QUESTION_PHRASES, extra_question_phrases)?;
        let review_hints = Self::build_matcher(REVIEW_HINTS, extra_review_hints)?;

        Ok(Self {
            question_phrases,
            review_hints,
        })
    }

    fn build_matcher(builtin: &[&str], extra: &[String]) -> Result<AhoCorasick> {
        let patterns = builtin
            .iter()
            .copied()
            .chain(extra.iter().map(String::as_str).filter(|p| !p.is_empty()));

        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(patterns)
            .map_err(|e| Error::config(format!("Failed to build phrase matcher: {e}")))
    }

    /// Heuristic question score for `text`; empty text scores 0
    pub fn score(&self, text: &str) -> i32 {
        let mut score = 0;

        if text.contains('?') {
            score += 1;
        }

        if let Some(first) = first_word(text) {
            let first = first.to_lowercase();
            if WH_WORDS.contains(&first.as_str()) || AUXILIARY_OPENERS.contains(&first.as_str()) {
                score += 2;
            }
        }

        if self.question_phrases.is_match(text) {
            score += 1;
        }

        if self.review_hints.is_match(text) {
            score -= 1;
        }

        score
    }

    /// Whether `text` reads as an inquiry rather than an experience
    pub fn is_question_like(&self, text: &str) -> bool {
        self.score(text) >= QUESTION_THRESHOLD
    }
}

impl Default for QuestionClassifier {
    fn default() -> Self {
        // only the built-in constant phrases, which always compile
        Self::new().expect("Failed to create question classifier")
    }
}

/// First non-empty token after splitting on non-word characters
fn first_word(text: &str) -> Option<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .find(|token| !token.is_empty())
}
