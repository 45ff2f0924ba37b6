//! Input preparation
//!
//! Upstream collectors hand over titles, bodies and comments in bulk. Before
//! analysis, texts that are too short to carry an opinion are dropped, and
//! exact duplicates (after trimming) are collapsed to their first occurrence.

use std::collections::HashSet;

/// Drop short and duplicate texts, keeping the input order
pub fn prepare_texts<T: AsRef<str>>(texts: Vec<T>, min_chars: usize) -> Vec<T> {
    let mut seen = HashSet::new();
    let total = texts.len();

    let kept: Vec<T> = texts
        .into_iter()
        .filter(|text| {
            let trimmed = text.as_ref().trim();
            trimmed.chars().count() >= min_chars && seen.insert(trimmed.to_string())
        })
        .collect();

    tracing::debug!(total, kept = kept.len(), "Prepared input texts");
    kept
}
