//! Thematic summary of a review corpus
//!
//! Counts the most frequent meaningful lemmas across all non-question texts
//! and joins the top entries into a short, comma-separated summary.

use crate::normalize;
use crate::question::QuestionClassifier;
use std::collections::{HashMap, HashSet};

/// Returned when no token survives filtering
pub const NO_THEMES: &str = "No significant common themes found.";

/// Default number of themes in a summary
pub const DEFAULT_TOP_N: usize = 5;

/// Tokens shorter than this (in characters) are never themes
const MIN_THEME_CHARS: usize = 4;

/// Function words plus terms every review of an instructor shares
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "even",
    "few", "for", "from", "further", "get", "got", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "like", "me", "more", "most", "much", "my", "myself", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "really", "same", "she", "should", "so", "some", "such",
    "take", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "took", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "whose", "why", "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
    "dont", "didnt", "doesnt", "isnt", "wasnt", "cant", "wont", "youre", "thats", "theyre",
    // domain terms
    "class", "course", "professor", "prof", "dr", "teacher", "instructor", "lecturer",
    "semester", "university", "college", "school", "student",
];

/// Extracts the most frequent themes from a set of reviews
#[derive(Debug, Clone)]
pub struct ThemeSummarizer {
    classifier: QuestionClassifier,
    stop_words: HashSet<String>,
}

impl ThemeSummarizer {
    /// Create a summarizer with the built-in stop words
    pub fn new(classifier: QuestionClassifier) -> Self {
        Self {
            classifier,
            stop_words: STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Add stop words on top of the built-in set
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Theme counts in descending frequency, ties in first-seen order
    pub fn themes<S: AsRef<str>>(&self, reviews: &[S], subject_name: &str) -> Vec<(String, usize)> {
        let subject_words = subject_stop_words(subject_name);

        // token -> (count, first position)
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        let mut position = 0;

        for review in reviews.iter().map(AsRef::as_ref) {
            if self.classifier.is_question_like(review) {
                continue;
            }

            for word in normalize::clean(review).split_whitespace() {
                // stop words are matched both as written and as lemmas
                if self.stop_words.contains(word) {
                    continue;
                }

                let token = normalize::normalize(word);
                if token.chars().count() < MIN_THEME_CHARS
                    || self.stop_words.contains(&token)
                    || subject_words.contains(&token)
                {
                    continue;
                }

                counts.entry(token).or_insert((0, position)).0 += 1;
                position += 1;
            }
        }

        let mut themes: Vec<_> = counts.into_iter().collect();
        themes.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        });

        themes
            .into_iter()
            .map(|(token, (count, _))| (token, count))
            .collect()
    }

    /// The top `top_n` themes joined by ", ", or [`NO_THEMES`]
    pub fn summarize<S: AsRef<str>>(&self, reviews: &[S], subject_name: &str, top_n: usize) -> String {
        let themes = self.themes(reviews, subject_name);

        if themes.is_empty() {
            return NO_THEMES.to_string();
        }

        themes
            .into_iter()
            .take(top_n)
            .map(|(token, _)| token)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ThemeSummarizer {
    fn default() -> Self {
        Self::new(QuestionClassifier::default())
    }
}

/// The subject's full lowercased name plus each of its parts
fn subject_stop_words(subject_name: &str) -> HashSet<String> {
    let full = normalize::clean(subject_name);
    let mut words: HashSet<String> = full.split_whitespace().map(normalize::normalize).collect();
    words.insert(full.trim().to_string());
    words
}
