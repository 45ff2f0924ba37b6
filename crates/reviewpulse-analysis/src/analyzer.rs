//! End-to-end review analysis
//!
//! Stages, in order:
//! 1. drop question-like texts, score the rest (order preserved)
//! 2. summarize themes over the original texts
//! 3. select the `2 * top_k` most polarizing reviews and weight-average
//!    their polarity, trusting objective reviews more
//! 4. narrow that provisional set to the `top_k` shown in the report

use crate::config::AnalysisConfig;
use crate::question::QuestionClassifier;
use crate::ranker::PolarizationRanker;
use crate::scorer::SentimentScorer;
use crate::themes::ThemeSummarizer;
use futures::stream::{self, StreamExt, TryStreamExt};
use reviewpulse_core::{AnalysisReport, Error, Result, ScoredReview};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Total weight below which the weighted mean falls back to a plain mean
const WEIGHT_EPSILON: f64 = 1e-9;

/// Orchestrates classification, scoring, ranking and summarization
#[derive(Clone)]
pub struct AggregateAnalyzer {
    scorer: Arc<dyn SentimentScorer>,
    classifier: QuestionClassifier,
    summarizer: ThemeSummarizer,
    ranker: PolarizationRanker,
    config: AnalysisConfig,
}

impl AggregateAnalyzer {
    /// Create an analyzer with the default configuration
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Result<Self> {
        Self::with_config(scorer, AnalysisConfig::default())
    }

    /// Create an analyzer from a validated configuration
    pub fn with_config(scorer: Arc<dyn SentimentScorer>, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let classifier = QuestionClassifier::with_phrases(
            &config.extra_question_phrases,
            &config.extra_review_hints,
        )?;
        let summarizer =
            ThemeSummarizer::new(classifier.clone()).with_extra_stop_words(&config.extra_stop_words);
        let ranker = PolarizationRanker::new(config.min_abs_polarity, config.min_subjectivity);

        Ok(Self {
            scorer,
            classifier,
            summarizer,
            ranker,
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Name of the underlying scorer
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Analyze `raw_texts` about `subject_name`, keeping `top_k` reviews (0 = all).
    ///
    /// Scorer errors are returned as-is; nothing is retried or skipped.
    pub async fn analyze<S>(
        &self,
        raw_texts: &[S],
        subject_name: &str,
        top_k: usize,
    ) -> Result<AnalysisReport>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        metrics::counter!("reviewpulse_texts_total").increment(raw_texts.len() as u64);

        let scored = self.score_reviews(raw_texts).await?;
        let discarded = raw_texts.len() - scored.len();
        metrics::counter!("reviewpulse_questions_discarded_total").increment(discarded as u64);
        debug!(scored = scored.len(), discarded, "Scoring stage done");

        let summary = self
            .summarizer
            .summarize(raw_texts, subject_name, self.config.theme_top_n);
        debug!(summary = %summary, "Theme stage done");

        let provisional = self.ranker.select(&scored, top_k.saturating_mul(2));
        let average_polarity = weighted_average_polarity(&provisional);
        let sentiments = self.ranker.select(&provisional, top_k);
        debug!(
            provisional = provisional.len(),
            selected = sentiments.len(),
            "Ranking stage done"
        );

        let latency_us = start.elapsed().as_micros() as u64;
        metrics::histogram!("reviewpulse_analysis_latency_us").record(latency_us as f64);

        info!(
            subject = subject_name,
            texts = raw_texts.len(),
            questions = discarded,
            scored = scored.len(),
            provisional = provisional.len(),
            selected = sentiments.len(),
            average_polarity,
            latency_us,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            sentiments,
            average_polarity,
            summary,
        })
    }

    /// Drop question-like texts and score the remainder in input order
    async fn score_reviews<S>(&self, raw_texts: &[S]) -> Result<Vec<ScoredReview>>
    where
        S: AsRef<str> + Sync,
    {
        let retained: Vec<&str> = raw_texts
            .iter()
            .map(AsRef::as_ref)
            .filter(|text| {
                let question = self.classifier.is_question_like(text);
                if question {
                    debug!(text = *text, "Discarding question-like text");
                }
                !question
            })
            .collect();

        // `buffered` yields results in input order regardless of completion order
        stream::iter(retained)
            .map(|text| async move {
                let sentiment = self.scorer.score(text).await?;
                Ok::<_, Error>(ScoredReview::new(text, sentiment))
            })
            .buffered(self.config.scoring_concurrency)
            .try_collect()
            .await
    }
}

/// Polarity averaged with weight `max(0, 1 - subjectivity)` per review.
///
/// Falls back to the plain mean when every review is fully subjective, and
/// returns 0.0 for no reviews.
pub fn weighted_average_polarity(reviews: &[ScoredReview]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    let (weighted_sum, total_weight) = reviews.iter().fold((0.0, 0.0), |(sum, total), review| {
        let weight = (1.0 - review.subjectivity()).max(0.0);
        (sum + weight * review.polarity(), total + weight)
    });

    let average = if total_weight > WEIGHT_EPSILON {
        weighted_sum / total_weight
    } else {
        reviews.iter().map(ScoredReview::polarity).sum::<f64>() / reviews.len() as f64
    };

    average.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::LexiconScorer;
    use reviewpulse_core::Sentiment;

    fn review(polarity: f64, subjectivity: f64) -> ScoredReview {
        ScoredReview::new("text", Sentiment::new(polarity, subjectivity).unwrap())
    }

    #[test]
    fn test_objective_review_dominates_average() {
        let average = weighted_average_polarity(&[review(0.8, 0.0), review(-0.8, 0.9)]);
        assert!((average - 0.72 / 1.1).abs() < 1e-12);
        assert!((average - 0.8).abs() < average.abs());
    }

    #[test]
    fn test_fully_subjective_falls_back_to_mean() {
        let average = weighted_average_polarity(&[review(0.6, 1.0), review(-0.2, 1.0)]);
        assert!((average - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_average() {
        assert_eq!(weighted_average_polarity(&[]), 0.0);
    }

    #[tokio::test]
    async fn test_empty_input_report() {
        let analyzer = AggregateAnalyzer::new(Arc::new(LexiconScorer::new())).unwrap();
        let texts: Vec<String> = Vec::new();

        let report = analyzer.analyze(&texts, "Menendez", 5).await.unwrap();

        assert!(report.sentiments.is_empty());
        assert_eq!(report.average_polarity, 0.0);
        assert_eq!(report.summary, crate::themes::NO_THEMES);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig {
            scoring_concurrency: 0,
            ..Default::default()
        };
        assert!(AggregateAnalyzer::with_config(Arc::new(LexiconScorer::new()), config).is_err());
    }
}
