//! Polarization ranking
//!
//! Surfaces the most emotionally charged reviews. Entries below the polarity
//! or subjectivity thresholds are dropped, the rest are ranked by
//! `|polarity| * (0.5 + 0.5 * subjectivity)`. The 0.5 floor keeps strongly
//! polar but objective statements in the ranking.

use reviewpulse_core::{RankedReview, ScoredReview};

/// Default minimum absolute polarity for a review to be ranked
pub const DEFAULT_MIN_ABS_POLARITY: f64 = 0.25;

/// Default minimum subjectivity for a review to be ranked
pub const DEFAULT_MIN_SUBJECTIVITY: f64 = 0.15;

/// Filters and ranks scored reviews by how polarizing they are
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarizationRanker {
    min_abs_polarity: f64,
    min_subjectivity: f64,
}

impl PolarizationRanker {
    /// Create a ranker with explicit thresholds
    pub fn new(min_abs_polarity: f64, min_subjectivity: f64) -> Self {
        Self {
            min_abs_polarity,
            min_subjectivity,
        }
    }

    pub fn min_abs_polarity(&self) -> f64 {
        self.min_abs_polarity
    }

    pub fn min_subjectivity(&self) -> f64 {
        self.min_subjectivity
    }

    /// Whether a review passes both thresholds
    pub fn passes(&self, review: &ScoredReview) -> bool {
        review.polarity().abs() >= self.min_abs_polarity
            && review.subjectivity() >= self.min_subjectivity
    }

    /// All reviews passing the thresholds, most polarizing first.
    ///
    /// Equal scores keep their input order.
    pub fn rank(&self, scored: &[ScoredReview]) -> Vec<RankedReview> {
        let mut ranked: Vec<RankedReview> = scored
            .iter()
            .filter(|review| self.passes(review))
            .cloned()
            .map(RankedReview::new)
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.polarization_score.total_cmp(&a.polarization_score));
        ranked
    }

    /// The `top_k` most polarizing reviews; `top_k == 0` returns all of them
    pub fn select(&self, scored: &[ScoredReview], top_k: usize) -> Vec<ScoredReview> {
        let limit = if top_k == 0 { usize::MAX } else { top_k };

        self.rank(scored)
            .into_iter()
            .take(limit)
            .map(RankedReview::into_review)
            .collect()
    }
}

impl Default for PolarizationRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ABS_POLARITY, DEFAULT_MIN_SUBJECTIVITY)
    }
}

/// Select the `top_k` most polarizing reviews with the given thresholds
pub fn select_most_polarizing(
    scored: &[ScoredReview],
    top_k: usize,
    min_abs_polarity: f64,
    min_subjectivity: f64,
) -> Vec<ScoredReview> {
    PolarizationRanker::new(min_abs_polarity, min_subjectivity).select(scored, top_k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reviewpulse_core::Sentiment;

    fn review(text: &str, polarity: f64, subjectivity: f64) -> ScoredReview {
        ScoredReview::new(text, Sentiment::new(polarity, subjectivity).unwrap())
    }

    fn texts(reviews: &[ScoredReview]) -> Vec<&str> {
        reviews.iter().map(ScoredReview::text).collect()
    }

    #[test]
    fn test_prefilter() {
        let scored = vec![
            review("weak", 0.1, 0.9),
            review("objective", 0.9, 0.1),
            review("kept", -0.5, 0.5),
            review("boundary", 0.25, 0.15),
        ];

        let selected = PolarizationRanker::default().select(&scored, 0);
        assert_eq!(texts(&selected), vec!["kept", "boundary"]);
    }

    #[test]
    fn test_ranking_order() {
        let scored = vec![
            review("mild", 0.3, 0.5),
            review("strong negative", -0.9, 0.8),
            review("strong positive", 0.8, 1.0),
        ];

        let ranked = PolarizationRanker::default().rank(&scored);
        assert_eq!(ranked[0].review.text(), "strong negative");
        assert_eq!(ranked[1].review.text(), "strong positive");
        assert_eq!(ranked[2].review.text(), "mild");
        assert!((ranked[0].polarization_score - 0.81).abs() < 1e-12);
    }

    #[test]
    fn test_objective_review_not_zeroed() {
        let ranked = PolarizationRanker::new(0.25, 0.0).rank(&[review("fact", 1.0, 0.0)]);
        assert_eq!(ranked[0].polarization_score, 0.5);
    }

    #[test]
    fn test_ties_are_stable() {
        let scored = vec![
            review("first", 0.6, 0.5),
            review("second", -0.6, 0.5),
            review("third", 0.6, 0.5),
        ];

        let selected = PolarizationRanker::default().select(&scored, 2);
        assert_eq!(texts(&selected), vec!["first", "second"]);
    }

    #[test]
    fn test_free_function_matches_ranker() {
        let scored = vec![review("a", 0.4, 0.4), review("b", -0.7, 0.2)];
        assert_eq!(
            select_most_polarizing(&scored, 1, 0.25, 0.15),
            PolarizationRanker::default().select(&scored, 1)
        );
    }

    #[test]
    fn test_input_untouched() {
        let scored = vec![review("low", 0.3, 0.3), review("high", 0.9, 0.9)];
        let before = scored.clone();
        let _ = PolarizationRanker::default().select(&scored, 1);
        assert_eq!(scored, before);
    }

    fn arb_reviews() -> impl Strategy<Value = Vec<ScoredReview>> {
        prop::collection::vec((-1.0f64..=1.0, 0.0f64..=1.0), 0..40).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (p, s))| review(&format!("review {i}"), p, s))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_length_and_thresholds(scored in arb_reviews(), top_k in 0usize..10) {
            let ranker = PolarizationRanker::default();
            let selected = ranker.select(&scored, top_k);

            if top_k > 0 {
                prop_assert!(selected.len() <= top_k);
            }
            for r in &selected {
                prop_assert!(r.polarity().abs() >= DEFAULT_MIN_ABS_POLARITY);
                prop_assert!(r.subjectivity() >= DEFAULT_MIN_SUBJECTIVITY);
            }
        }

        #[test]
        fn prop_descending_and_stable(scored in arb_reviews()) {
            let ranked = PolarizationRanker::default().rank(&scored);
            let index = |r: &RankedReview| {
                scored.iter().position(|s| s.text() == r.review.text()).unwrap()
            };

            for pair in ranked.windows(2) {
                prop_assert!(pair[0].polarization_score >= pair[1].polarization_score);
                if pair[0].polarization_score == pair[1].polarization_score {
                    prop_assert!(index(&pair[0]) < index(&pair[1]));
                }
            }
        }
    }
}
