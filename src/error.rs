//! Error handling for Nordic processing operations.
//!
//! The parsing core never fails: missing or malformed fields become `None`
//! and constraint violations become validation diagnostics. These error
//! types cover the surrounding work of finding, reading and exporting files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NordicError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("No Nordic files matched under: {path}")]
    NoInputFiles { path: PathBuf },

    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Directory traversal failed: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error("Export failed for file: {path} - {reason}")]
    ExportFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, NordicError>;
