//! CLI argument parsing for motif-grover

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for search plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "motif-grover")]
#[command(version)]
#[command(
    about = "Plan a Grover search for a DNA motif: matches, oracle and iteration count",
    long_about = None,
    after_help = "Examples:\n  motif-grover ATCGATCGATCG ATCG\n  motif-grover --file dna_sequence.txt AGCT"
)]
pub struct Cli {
    /// DNA sequence (or the motif, when --file is given)
    #[arg(value_name = "SEQUENCE")]
    pub sequence_or_motif: Option<String>,

    /// Motif pattern to search for
    #[arg(value_name = "MOTIF")]
    pub motif: Option<String>,

    /// Read the DNA sequence from a file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Load search settings from a TOML file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Worker threads for the parallel matcher
    #[arg(short = 't', long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Sequence length above which the parallel matcher is used
    #[arg(long = "parallel-threshold", value_name = "BASES")]
    pub parallel_threshold: Option<usize>,

    /// Measurement counts (JSON object of state -> count) to analyze
    #[arg(long = "counts", value_name = "PATH")]
    pub counts: Option<PathBuf>,

    /// Total shots behind --counts (defaults to the configured shot count)
    #[arg(long = "shots", value_name = "N")]
    pub shots: Option<u64>,

    /// Number of most frequent states to report
    #[arg(long = "top", value_name = "K", default_value = "20")]
    pub top: usize,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_sequence_and_motif() {
        let cli = Cli::parse_from(["motif-grover", "ATCGATCG", "ATCG"]);
        assert_eq!(cli.sequence_or_motif.as_deref(), Some("ATCGATCG"));
        assert_eq!(cli.motif.as_deref(), Some("ATCG"));
        assert!(cli.file.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.top, 20);
    }

    #[test]
    fn test_cli_file_mode() {
        let cli = Cli::parse_from(["motif-grover", "--file", "seq.txt", "AGCT"]);
        assert_eq!(cli.file, Some(PathBuf::from("seq.txt")));
        assert_eq!(cli.sequence_or_motif.as_deref(), Some("AGCT"));
        assert!(cli.motif.is_none());
    }

    #[test]
    fn test_cli_tuning_flags() {
        let cli = Cli::parse_from([
            "motif-grover",
            "-t",
            "8",
            "--parallel-threshold",
            "500",
            "--format",
            "json",
            "ACGT",
            "CG",
        ]);
        assert_eq!(cli.threads, Some(8));
        assert_eq!(cli.parallel_threshold, Some(500));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_counts_flags() {
        let cli = Cli::parse_from([
            "motif-grover",
            "--counts",
            "counts.json",
            "--shots",
            "2048",
            "ACGT",
            "CG",
        ]);
        assert_eq!(cli.counts, Some(PathBuf::from("counts.json")));
        assert_eq!(cli.shots, Some(2048));
    }

    #[test]
    fn test_cli_debug_default_false() {
        let cli = Cli::parse_from(["motif-grover", "ACGT", "CG"]);
        assert!(!cli.debug);
    }
}
