//! wordfreq CLI - Main entry point

mod cli;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordfreq_foundation::WordFreqConfig;

/// wordfreq - report the most frequent word(s) of a text file
#[derive(Parser, Debug)]
#[command(name = "wordfreq")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file to scan
    path: PathBuf,

    /// Print the whole word-count tree before the report
    #[arg(long)]
    verbose: bool,

    /// Maximum word length (default 30)
    #[arg(long)]
    max_word_length: Option<usize>,

    /// Load settings from this file (on top of global and project settings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// 설정 우선순위: 기본값 → 글로벌 → 프로젝트 → --config → CLI 플래그
    fn resolve_config(&self) -> anyhow::Result<WordFreqConfig> {
        let mut config = WordFreqConfig::load();

        if let Some(path) = &self.config {
            config.merge(WordFreqConfig::load_from(path)?);
        }

        if let Some(max_word_length) = self.max_word_length {
            config.max_word_length = Some(max_word_length);
        }
        if self.verbose {
            config.verbose = Some(true);
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging (stdout은 보고서 전용)
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = args.resolve_config().context("Invalid configuration")?;
    tracing::debug!(
        "max word length: {}, verbose: {}",
        config.max_word_length(),
        config.verbose()
    );

    let stdout = std::io::stdout();
    cli::run_once(&args.path, &config, &mut stdout.lock())
        .context("An error has happened!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "wordfreq",
            "input.txt",
            "--verbose",
            "--max-word-length",
            "12",
        ]);
        assert_eq!(args.path, PathBuf::from("input.txt"));
        assert!(args.verbose);
        assert_eq!(args.max_word_length, Some(12));
        assert!(args.config.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_args_require_path() {
        assert!(Args::try_parse_from(["wordfreq"]).is_err());
        assert!(Args::try_parse_from(["wordfreq", "a.txt", "--unknown"]).is_err());
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wf.json");
        std::fs::write(&path, r#"{"maxWordLength": 5, "verbose": false}"#).unwrap();

        let args = Args::parse_from([
            "wordfreq".to_string(),
            "input.txt".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--verbose".to_string(),
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.max_word_length(), 5);
        assert!(config.verbose());
    }

    #[test]
    fn test_zero_max_word_length_rejected() {
        let args = Args::parse_from(["wordfreq", "input.txt", "--max-word-length", "0"]);
        assert!(args.resolve_config().is_err());
    }
}
