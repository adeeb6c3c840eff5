//! File discovery module for Nordic bulletins
//!
//! Resolves the command-line input into the list of files to parse. A file
//! path is taken as-is; a directory is walked recursively and every file
//! whose name matches one of the configured glob patterns is kept.

use crate::error::{NordicError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File discovery component for Nordic inputs
#[derive(Debug)]
pub struct FileDiscovery {
    input_path: PathBuf,
    patterns: Vec<Pattern>,
}

impl FileDiscovery {
    /// Create a discovery instance, compiling the file name patterns
    pub fn new(input_path: PathBuf, patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| NordicError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            input_path,
            patterns,
        })
    }

    /// Discover the files to process, sorted by path
    ///
    /// ```text
    /// bulletins/
    ///   2023/
    ///     01-0932-11L.S202301
    ///     collect.out
    ///   notes.txt            (skipped)
    ///   2024.nor
    /// ```
    pub fn discover_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_path.exists() {
            return Err(NordicError::InputNotFound {
                path: self.input_path.clone(),
            });
        }

        if self.input_path.is_file() {
            debug!("Input is a single file: {}", self.input_path.display());
            return Ok(vec![self.input_path.clone()]);
        }

        debug!("Searching for Nordic files in: {}", self.input_path.display());

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.input_path).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        if files.is_empty() {
            return Err(NordicError::NoInputFiles {
                path: self.input_path.clone(),
            });
        }

        debug!("Found {} Nordic files", files.len());
        Ok(files)
    }

    /// Check a path's file name against the patterns
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.patterns.iter().any(|p| p.matches(name)))
    }
}
