//! Command-line parsing for the photometric mass calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! physical model and the ingest code.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "photmass",
    version,
    about = "Photometric mass of a meteoroid from its light curve (Ceplecha 1966)"
)]
pub struct Cli {
    /// Light-curve CSV with one `time,magnitude,velocity` row per line.
    #[arg(short = 'i', long, value_name = "CSV", env = "PHOTMASS_INPUT")]
    pub input: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print the per-sample diagnostic lines.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// List the samples read from the input file.
    #[arg(long)]
    pub show_samples: bool,

    /// Render an ASCII plot of the light curve.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_input_flag_with_defaults() {
        let cli = Cli::try_parse_from(["photmass", "-i", "curve.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("curve.csv"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.quiet && !cli.show_samples && !cli.plot);
        assert_eq!((cli.width, cli.height), (72, 20));
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "photmass",
            "--input",
            "curve.csv",
            "--format",
            "json",
            "-q",
            "--show-samples",
            "--plot",
            "--width",
            "40",
            "--height",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet && cli.show_samples && cli.plot);
        assert_eq!((cli.width, cli.height), (40, 10));
    }

    #[test]
    fn output_file_option_is_not_accepted() {
        let err = Cli::try_parse_from(["photmass", "-i", "in.csv", "-o", "out.txt"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
