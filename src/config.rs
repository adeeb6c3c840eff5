//! Configuration management and validation.
//!
//! Provides the processing configuration: sentinel values recorded on every
//! event, discovery patterns, whether validation runs, and Parquet export
//! settings. Configuration can be loaded from a JSON file; missing keys fall
//! back to their defaults.

use crate::constants::{DEFAULT_AUTHOR_ID, DEFAULT_FILE_PATTERNS, DEFAULT_LOCATING_PROGRAM};
use crate::error::{NordicError, Result};
use clap::ValueEnum;
use polars::prelude::ParquetCompression;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Supported compression algorithms for parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompressionAlgorithm {
    /// Snappy compression - good balance of speed and compression
    Snappy,
    /// ZSTD compression - better compression ratio, slower
    Zstd,
    /// LZ4 compression - fastest, lower compression ratio
    Lz4,
    /// No compression
    #[serde(alias = "none")]
    #[value(alias = "none")]
    Uncompressed,
}

impl CompressionAlgorithm {
    /// Convert to polars ParquetCompression type
    pub fn to_polars_compression(&self) -> ParquetCompression {
        match self {
            CompressionAlgorithm::Snappy => ParquetCompression::Snappy,
            CompressionAlgorithm::Zstd => ParquetCompression::Zstd(None),
            CompressionAlgorithm::Lz4 => ParquetCompression::Lz4Raw,
            CompressionAlgorithm::Uncompressed => ParquetCompression::Uncompressed,
        }
    }
}

/// Parquet export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParquetExportConfig {
    /// Compression algorithm selection
    pub compression_algorithm: CompressionAlgorithm,

    /// Enable column statistics for query pruning
    pub enable_statistics: bool,
}

impl Default for ParquetExportConfig {
    fn default() -> Self {
        Self {
            compression_algorithm: CompressionAlgorithm::Snappy,
            enable_statistics: true,
        }
    }
}

/// Global configuration for Nordic processing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NordicConfig {
    /// Author id recorded when no comment carries one
    pub default_author_id: String,

    /// Locating program recorded on every event
    pub locating_program: String,

    /// Run the header validators on every parsed event
    pub validate: bool,

    /// Glob patterns matched against file names during directory discovery
    pub file_patterns: Vec<String>,

    /// Parquet export configuration
    pub parquet: ParquetExportConfig,
}

impl Default for NordicConfig {
    fn default() -> Self {
        Self {
            default_author_id: DEFAULT_AUTHOR_ID.to_string(),
            locating_program: DEFAULT_LOCATING_PROGRAM.to_string(),
            validate: true,
            file_patterns: DEFAULT_FILE_PATTERNS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
            parquet: ParquetExportConfig::default(),
        }
    }
}

impl NordicConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NordicError::Configuration {
                message: format!("Config file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: NordicConfig = serde_json::from_str(&content)?;
        config.validate_settings()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the configuration for values that would make processing meaningless
    pub fn validate_settings(&self) -> Result<()> {
        if self.file_patterns.is_empty() {
            return Err(NordicError::Configuration {
                message: "At least one file pattern is required".to_string(),
            });
        }

        for pattern in &self.file_patterns {
            glob::Pattern::new(pattern).map_err(|source| NordicError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        if self.default_author_id.trim().is_empty() {
            return Err(NordicError::Configuration {
                message: "Default author id must not be blank".to_string(),
            });
        }

        if self.locating_program.trim().is_empty() {
            return Err(NordicError::Configuration {
                message: "Locating program must not be blank".to_string(),
            });
        }

        Ok(())
    }

    /// Set the author id used when no comment carries one
    pub fn with_default_author_id(mut self, author_id: impl Into<String>) -> Self {
        self.default_author_id = author_id.into();
        self
    }

    /// Set the locating program recorded on every event
    pub fn with_locating_program(mut self, program: impl Into<String>) -> Self {
        self.locating_program = program.into();
        self
    }

    /// Disable header validation
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Replace the discovery file patterns
    pub fn with_file_patterns(mut self, patterns: Vec<String>) -> Self {
        self.file_patterns = patterns;
        self
    }

    /// Set the parquet compression algorithm
    pub fn with_compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.parquet.compression_algorithm = compression;
        self
    }
}
