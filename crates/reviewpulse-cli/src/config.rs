//! CLI configuration

use reviewpulse_analysis::AnalysisConfig;
use std::path::Path;

/// Load the analysis configuration from file and apply CLI overrides.
///
/// A missing file falls back to defaults.
pub fn load(config_path: &str, cli: &crate::Cli) -> anyhow::Result<AnalysisConfig> {
    let mut config = if Path::new(config_path).exists() {
        AnalysisConfig::from_file(config_path)?
    } else {
        tracing::debug!("No configuration file at {}, using defaults", config_path);
        AnalysisConfig::default()
    };

    if let Some(top_k) = cli.top_k {
        config.top_k_polarizing = top_k;
    }

    if let Some(min_abs_polarity) = cli.min_abs_polarity {
        config.min_abs_polarity = min_abs_polarity;
    }

    if let Some(min_subjectivity) = cli.min_subjectivity {
        config.min_subjectivity = min_subjectivity;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let cli = Cli::parse_from(["reviewpulse", "--subject", "Menendez"]);
        let config = load("/nonexistent/reviewpulse.yaml", &cli).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "top_k_polarizing: 3\nmin_subjectivity: 0.3").unwrap();

        let cli = Cli::parse_from(["reviewpulse", "-s", "Menendez", "-k", "7"]);
        let config = load(file.path().to_str().unwrap(), &cli).unwrap();

        assert_eq!(config.top_k_polarizing, 7);
        assert_eq!(config.min_subjectivity, 0.3);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::parse_from([
            "reviewpulse",
            "-s",
            "Menendez",
            "--min-abs-polarity",
            "2.0",
        ]);
        assert!(load("/nonexistent/reviewpulse.yaml", &cli).is_err());
    }
}
