//! Text cleaning and lemmatization
//!
//! `clean` lowercases and strips everything that is neither a word character
//! nor whitespace. `normalize` maps a token to its dictionary base form using
//! an English noun lemmatizer: an irregular-form table first, then guarded
//! suffix rules.
//!
//! The lemmatizer tables are built once, on first use, behind a process-wide
//! [`Lazy`]; concurrent first use is safe and initialization runs exactly once.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex"));

static LEMMATIZER: Lazy<Lemmatizer> = Lazy::new(Lemmatizer::english);

/// Irregular plurals and forms the suffix rules would get wrong
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("appendices", "appendix"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("quizzes", "quiz"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("halves", "half"),
    ("leaves", "leaf"),
    ("selves", "self"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("goes", "go"),
];

/// Words ending in "s" that are already base forms
const INVARIANT_FORMS: &[&str] = &[
    "always",
    "perhaps",
    "towards",
    "afterwards",
    "sometimes",
    "news",
    "series",
    "species",
    "physics",
    "mathematics",
    "economics",
    "statistics",
    "politics",
    "ethics",
    "genetics",
    "lens",
    "bias",
    "chaos",
    "does",
    "yes",
    "thus",
    "ourselves",
    "yourselves",
    "themselves",
];

/// Endings that mark a singular word despite the trailing "s"
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Plural endings where the whole "es" is dropped
const ES_ENDINGS: &[&str] = &["sses", "ches", "shes", "xes", "zes"];

/// Rule-based English lemmatizer
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl Lemmatizer {
    /// Build the English tables
    pub fn english() -> Self {
        tracing::debug!("Initializing lemmatizer tables");
        Self {
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
            invariant: INVARIANT_FORMS.iter().copied().collect(),
        }
    }

    /// Reduce `word` to its lowercase base form
    pub fn lemmatize(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if let Some(lemma) = self.irregular.get(word.as_str()) {
            return (*lemma).to_string();
        }

        if word.chars().count() <= 3
            || self.invariant.contains(word.as_str())
            || SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending))
        {
            return word;
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if stem.chars().count() > 1 {
                return format!("{stem}y");
            }
        }

        if ES_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
            return word[..word.len() - 2].to_string();
        }

        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word,
        }
    }
}

/// The shared lemmatizer, initialized on first call
pub fn lemmatizer() -> &'static Lemmatizer {
    &LEMMATIZER
}

/// Lowercase `text` and strip all non-word, non-whitespace characters
pub fn clean(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Reduce a single token to its base form
pub fn normalize(word: &str) -> String {
    lemmatizer().lemmatize(word)
}

/// Clean `text` and lemmatize each whitespace-separated token
pub fn tokenize(text: &str) -> Vec<String> {
    clean(text).split_whitespace().map(normalize).collect()
}
