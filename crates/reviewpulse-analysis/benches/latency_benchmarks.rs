//! Latency benchmarks for the analysis pipeline
//!
//! Run with: cargo bench -p reviewpulse-analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

use reviewpulse_analysis::{
    AggregateAnalyzer, LexiconScorer, PolarizationRanker, QuestionClassifier, ThemeSummarizer,
};
use reviewpulse_core::{ScoredReview, Sentiment};

const CORPUS: &[&str] = &[
    "Should I take him for CS205?",
    "He graded fairly and explained concepts well.",
    "Honestly the worst lectures I have ever sat through, completely disorganized.",
    "Brilliant teacher, the exams were hard but fair and office hours were great.",
    "Has anyone taken his algorithms section? Is it worth taking?",
    "The homework load was heavy but the curve saved everyone.",
    "Boring slides, unclear expectations, and rude replies to emails.",
    "I took him last spring and loved every lecture.",
];

fn corpus(copies: usize) -> Vec<String> {
    (0..copies)
        .flat_map(|i| CORPUS.iter().map(move |t| format!("{t} ({i})")))
        .collect()
}

/// Benchmark the question heuristic
fn benchmark_question_classifier(c: &mut Criterion) {
    let classifier = QuestionClassifier::new().expect("Failed to create question classifier");

    let mut group = c.benchmark_group("Question_Classifier");
    group.sample_size(100);

    for (i, text) in CORPUS.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("is_question_like", i), text, |b, text| {
            b.iter(|| classifier.is_question_like(black_box(text)))
        });
    }

    group.finish();
}

/// Benchmark theme summarization over growing corpora
fn benchmark_theme_summarizer(c: &mut Criterion) {
    let summarizer = ThemeSummarizer::default();

    let mut group = c.benchmark_group("Theme_Summarizer");

    for copies in [1, 10, 100] {
        let texts = corpus(copies);
        group.bench_with_input(BenchmarkId::new("summarize", texts.len()), &texts, |b, texts| {
            b.iter(|| summarizer.summarize(black_box(texts), "Menendez", 5))
        });
    }

    group.finish();
}

/// Benchmark polarization ranking
fn benchmark_ranker(c: &mut Criterion) {
    let ranker = PolarizationRanker::default();

    let mut group = c.benchmark_group("Polarization_Ranker");

    for size in [10usize, 100, 1000] {
        let scored: Vec<ScoredReview> = (0..size)
            .map(|i| {
                let polarity = ((i * 37) % 200) as f64 / 100.0 - 1.0;
                let subjectivity = ((i * 11) % 100) as f64 / 100.0;
                ScoredReview::new(
                    format!("review {i}"),
                    Sentiment::new(polarity, subjectivity).unwrap(),
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("select", size), &scored, |b, scored| {
            b.iter(|| ranker.select(black_box(scored), 10))
        });
    }

    group.finish();
}

/// Benchmark the full pipeline with the lexicon scorer
fn benchmark_full_analysis(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let analyzer = AggregateAnalyzer::new(Arc::new(LexiconScorer::new()))
        .expect("Failed to create analyzer");

    let mut group = c.benchmark_group("Full_Analysis");

    for copies in [1, 10, 100] {
        let texts = corpus(copies);
        group.bench_with_input(BenchmarkId::new("analyze", texts.len()), &texts, |b, texts| {
            b.iter(|| {
                rt.block_on(async {
                    analyzer
                        .analyze(black_box(texts), "Menendez", 5)
                        .await
                        .unwrap()
                })
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_question_classifier,
    benchmark_theme_summarizer,
    benchmark_ranker,
    benchmark_full_analysis
);
criterion_main!(benches);
