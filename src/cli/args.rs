//! Command-line argument definitions for the Nordic processor
//!
//! Defines the CLI interface using the clap derive API and layers the
//! command-line overrides on top of the JSON configuration file.

use crate::config::{CompressionAlgorithm, NordicConfig};
use crate::error::{NordicError, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Nordic bulletin processor
///
/// Parses Nordic-format seismic bulletins, validates their headers and
/// optionally exports events and phase picks to Parquet.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nordic",
    version,
    about = "Parse and validate Nordic seismic bulletins, exporting them to Parquet"
)]
pub struct Args {
    /// Nordic file, or directory searched recursively for Nordic files
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Directory for the Parquet output (export is skipped when absent)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Parse and validate only, never write Parquet
    #[arg(long = "validate-only")]
    pub validate_only: bool,

    /// Skip header validation
    #[arg(long = "no-validate", conflicts_with = "validate_only")]
    pub no_validate: bool,

    /// Parquet compression algorithm
    #[arg(long, value_enum, value_name = "ALGORITHM")]
    pub compression: Option<CompressionAlgorithm>,

    /// File name pattern used for directory discovery (repeatable)
    #[arg(long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,

    /// JSON configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Summary output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }

    /// Output directory, unless export is disabled
    pub fn export_dir(&self) -> Option<&PathBuf> {
        if self.validate_only {
            None
        } else {
            self.output_dir.as_ref()
        }
    }

    /// Build the effective configuration: file, then command-line overrides
    pub fn build_config(&self) -> Result<NordicConfig> {
        let mut config = match &self.config_file {
            Some(path) => NordicConfig::from_json_file(path)?,
            None => NordicConfig::default(),
        };

        if self.no_validate {
            config = config.without_validation();
        }

        if let Some(compression) = self.compression {
            config = config.with_compression(compression);
        }

        if !self.patterns.is_empty() {
            config = config.with_file_patterns(self.patterns.clone());
        }

        config.validate_settings()?;
        Ok(config)
    }

    /// Validate argument combinations that clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(output_dir) = self.export_dir() {
            if output_dir.is_file() {
                return Err(NordicError::Configuration {
                    message: format!(
                        "Output path is a file, not a directory: {}",
                        output_dir.display()
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("nordic").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_minimal_args() {
        let args = parse(&["collect.out"]);
        assert_eq!(args.input_path, PathBuf::from("collect.out"));
        assert!(args.output_dir.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.show_progress());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&["a", "-vv"]).get_log_level(), "debug");
        assert_eq!(parse(&["a", "-vvvv"]).get_log_level(), "trace");
        assert_eq!(parse(&["a", "-q"]).get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["nordic", "a", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_validate_only_disables_export() {
        let args = parse(&["a", "-o", "out", "--validate-only"]);
        assert!(args.export_dir().is_none());

        let args = parse(&["a", "-o", "out"]);
        assert_eq!(args.export_dir(), Some(&PathBuf::from("out")));
    }

    #[test]
    fn test_no_validate_conflicts_with_validate_only() {
        assert!(Args::try_parse_from(["nordic", "a", "--no-validate", "--validate-only"]).is_err());
    }

    #[test]
    fn test_overrides_applied_to_config() {
        let args = parse(&[
            "a",
            "--no-validate",
            "--compression",
            "zstd",
            "--pattern",
            "*.sfile",
            "--pattern",
            "*.nor",
        ]);
        let config = args.build_config().unwrap();

        assert!(!config.validate);
        assert_eq!(
            config.parquet.compression_algorithm,
            CompressionAlgorithm::Zstd
        );
        assert_eq!(config.file_patterns, vec!["*.sfile", "*.nor"]);
    }

    #[test]
    fn test_unknown_compression_rejected() {
        assert!(Args::try_parse_from(["nordic", "a", "--compression", "brotli"]).is_err());
    }

    #[test]
    fn test_compression_none_alias() {
        let args = parse(&["a", "--compression", "none"]);
        assert_eq!(args.compression, Some(CompressionAlgorithm::Uncompressed));
    }

    #[test]
    fn test_config_file_then_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"default_author_id": "XXX", "validate": false}}"#).unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = parse(&["a", "--config", &path, "--compression", "lz4"]);
        let config = args.build_config().unwrap();

        assert_eq!(config.default_author_id, "XXX");
        assert!(!config.validate);
        assert_eq!(
            config.parquet.compression_algorithm,
            CompressionAlgorithm::Lz4
        );
    }

    #[test]
    fn test_json_format_hides_progress() {
        assert!(!parse(&["a", "--format", "json"]).show_progress());
    }
}
