//! ReviewPulse CLI
//!
//! Reads already-fetched texts about a person from a JSON file (or stdin),
//! runs one analysis and prints the report as JSON on stdout. Logs go to
//! stderr so the output stays machine-readable.

use anyhow::Result;
use clap::Parser;
use reviewpulse_analysis::{prepare_texts, AggregateAnalyzer, LexiconScorer};
use std::sync::Arc;
use tracing::{info, warn};

mod config;
mod input;

#[derive(Parser, Debug)]
#[command(name = "reviewpulse")]
#[command(about = "Condensed sentiment profile from review texts", long_about = None)]
struct Cli {
    /// Name of the person the texts are about
    #[arg(short, long)]
    subject: String,

    /// Input JSON file with texts ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Configuration file path
    #[arg(short, long, env = "REVIEWPULSE_CONFIG", default_value = "reviewpulse.yaml")]
    config: String,

    /// Number of polarizing reviews to report (0 = all)
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Minimum absolute polarity for ranked reviews
    #[arg(long)]
    min_abs_polarity: Option<f64>,

    /// Minimum subjectivity for ranked reviews
    #[arg(long)]
    min_subjectivity: Option<f64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = config::load(&cli.config, &cli)?;
    info!("Configuration loaded");

    let texts = input::read_texts(&cli.input)?;
    let texts = prepare_texts(texts, config.min_text_chars);
    if texts.is_empty() {
        warn!("No usable texts found for {}", cli.subject);
    }

    let scorer = Arc::new(LexiconScorer::with_max_chars(config.scorer.max_chars));
    let top_k = config.top_k_polarizing;
    let analyzer = AggregateAnalyzer::with_config(scorer, config)?;
    info!("Scoring with {}", analyzer.scorer_name());

    let report = analyzer.analyze(&texts, &cli.subject, top_k).await?;

    let json = if cli.pretty {
        report.to_json_pretty()?
    } else {
        report.to_json()?
    };
    println!("{json}");

    Ok(())
}

/// Initialize tracing/logging on stderr
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("reviewpulse=debug,reviewpulse_analysis=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("reviewpulse=info,reviewpulse_analysis=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
