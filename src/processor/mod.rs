//! Processing engine for Nordic bulletin files.
//!
//! Ties the pieces together for each input file: split it into event
//! blocks, parse and optionally validate each event, then hand the events to
//! the Parquet writer when an output directory is configured.

pub mod discovery;
pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::reader::{EventBlock, read_event_blocks};
use self::writer::{EventWriter, ExportedFiles};

use crate::config::NordicConfig;
use crate::error::Result;
use crate::models::{Event, HeaderType};
use crate::parser::{DroppedLine, parse_event};
use crate::validation::{Diagnostic, DiagnosticCollector, validate_event};

use indicatif::ProgressBar;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// One parsed event with its position in the source file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedEvent {
    /// 0-based position of the event within its file
    pub index: usize,
    /// 1-based line number of the event's first line
    pub first_line: usize,
    pub event: Event,
    pub dropped: Vec<DroppedLine>,
    /// `None` when validation is disabled
    pub valid: Option<bool>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of processing one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub events: Vec<ProcessedEvent>,
    #[serde(skip)]
    pub exported: Option<ExportedFiles>,
}

impl FileReport {
    pub fn valid_events(&self) -> usize {
        self.events.iter().filter(|e| e.valid == Some(true)).count()
    }

    pub fn invalid_events(&self) -> usize {
        self.events.iter().filter(|e| e.valid == Some(false)).count()
    }

    pub fn phase_records(&self) -> usize {
        self.events.iter().map(|e| e.event.phase_data.len()).sum()
    }

    pub fn dropped_lines(&self) -> usize {
        self.events.iter().map(|e| e.dropped.len()).sum()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter().flat_map(|e| e.diagnostics.iter())
    }
}

/// A file that could not be processed
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregate statistics over a processing run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub files_exported: usize,
    pub events_parsed: usize,
    pub events_valid: usize,
    pub events_invalid: usize,
    pub headers_by_type: BTreeMap<HeaderType, usize>,
    pub phase_records: usize,
    pub dropped_lines: usize,
    pub diagnostics: usize,
    pub failures: Vec<FailedFile>,
    pub processing_time_ms: u128,
}

impl ProcessingStats {
    /// Fold one file's report into the totals
    pub fn record_file(&mut self, report: &FileReport) {
        self.files_processed += 1;
        if report.exported.is_some() {
            self.files_exported += 1;
        }

        self.events_parsed += report.events.len();
        self.events_valid += report.valid_events();
        self.events_invalid += report.invalid_events();
        self.phase_records += report.phase_records();
        self.dropped_lines += report.dropped_lines();
        self.diagnostics += report.diagnostics().count();

        for event in &report.events {
            for header_type in HeaderType::ALL {
                *self.headers_by_type.entry(header_type).or_default() +=
                    event.event.headers.count(header_type);
            }
        }
    }

    /// Record a file that failed to process
    pub fn record_failure(&mut self, path: &Path, reason: String) {
        self.files_failed += 1;
        self.failures.push(FailedFile {
            path: path.to_path_buf(),
            reason,
        });
    }
}

/// Main processor for Nordic bulletin files
#[derive(Debug)]
pub struct NordicProcessor {
    config: NordicConfig,
    writer: Option<EventWriter>,
    input_root: Option<PathBuf>,
}

impl NordicProcessor {
    /// Create a processor that parses and validates without exporting
    pub fn new(config: NordicConfig) -> Self {
        Self {
            config,
            writer: None,
            input_root: None,
        }
    }

    /// Export each processed file to Parquet under `output_dir`
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.writer = Some(EventWriter::new(output_dir, self.config.parquet.clone()));
        self
    }

    /// Name exports after each file's path relative to `input_root`
    pub fn with_input_root(mut self, input_root: PathBuf) -> Self {
        self.input_root = Some(input_root);
        self
    }

    pub fn config(&self) -> &NordicConfig {
        &self.config
    }

    /// Parse, and validate when enabled, every event block
    pub fn process_blocks(&self, blocks: &[EventBlock]) -> Vec<ProcessedEvent> {
        blocks
            .iter()
            .enumerate()
            .map(|(index, block)| self.process_block(index, block))
            .collect()
    }

    fn process_block(&self, index: usize, block: &EventBlock) -> ProcessedEvent {
        let parsed = parse_event(&block.lines, &self.config);

        for dropped in &parsed.dropped {
            debug!(
                "Dropped header at line {} (marker '{}')",
                block.first_line + dropped.index,
                dropped.marker
            );
        }

        let (valid, diagnostics) = if self.config.validate {
            let mut collector = DiagnosticCollector::new();
            let valid = validate_event(&parsed.event, &mut collector);
            (Some(valid), collector.into_diagnostics())
        } else {
            (None, Vec::new())
        };

        ProcessedEvent {
            index,
            first_line: block.first_line,
            event: parsed.event,
            dropped: parsed.dropped,
            valid,
            diagnostics,
        }
    }

    /// Export stem for a file, unique among the files under one root
    pub fn output_stem(&self, path: &Path) -> String {
        output_stem(path, self.input_root.as_deref())
    }

    /// Process a single Nordic file
    pub fn process_file(&self, path: &Path) -> Result<FileReport> {
        self.process_file_as(path, &self.output_stem(path))
    }

    fn process_file_as(&self, path: &Path, stem: &str) -> Result<FileReport> {
        let blocks = read_event_blocks(path)?;
        let events = self.process_blocks(&blocks);

        let exported = match &self.writer {
            Some(writer) => writer.write_events(stem, &events)?,
            None => None,
        };

        debug!("Processed {}: {} events", path.display(), events.len());

        Ok(FileReport {
            path: path.to_path_buf(),
            events,
            exported,
        })
    }

    /// Process files in order, continuing past files that fail
    ///
    /// `on_report` receives each successful file's report before it is
    /// folded into the statistics.
    pub fn process_files(
        &self,
        files: &[PathBuf],
        progress: Option<&ProgressBar>,
        mut on_report: impl FnMut(&FileReport),
    ) -> ProcessingStats {
        let start_time = Instant::now();
        let mut stats = ProcessingStats::default();
        let mut used_stems = HashSet::new();

        for file in files {
            if let Some(pb) = progress {
                if let Some(name) = file.file_name() {
                    pb.set_message(format!("Processing: {}", name.to_string_lossy()));
                }
            }

            let stem = unique_stem(self.output_stem(file), &mut used_stems);

            match self.process_file_as(file, &stem) {
                Ok(report) => {
                    on_report(&report);
                    stats.record_file(&report);
                }
                Err(e) => {
                    warn!("Failed to process {}: {}", file.display(), e);
                    stats.record_failure(file, e.to_string());
                }
            }

            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        info!(
            "Processed {} files ({} failed), {} events",
            stats.files_processed, stats.files_failed, stats.events_parsed
        );

        stats
    }
}

/// Output file stem for an input path
///
/// Path components below `root` are joined with '_' and the extension is
/// kept, so `2023/collect.out` becomes `2023_collect.out`. Without a root,
/// or for the root itself, only the file name is used.
fn output_stem(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .filter(|relative| relative.components().next().is_some());

    let parts: Vec<String> = match relative {
        Some(relative) => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect(),
        None => path
            .file_name()
            .map(|name| vec![name.to_string_lossy().to_string()])
            .unwrap_or_default(),
    };

    if parts.is_empty() {
        "events".to_string()
    } else {
        parts.join("_")
    }
}

/// Suffix `stem` with `_2`, `_3`, ... until it is unused in this run
fn unique_stem(stem: String, used: &mut HashSet<String>) -> String {
    let mut candidate = stem.clone();
    let mut n = 2;
    while used.contains(&candidate) {
        candidate = format!("{}_{}", stem, n);
        n += 1;
    }

    if candidate != stem {
        warn!("Export name '{}' already used, writing as '{}'", stem, candidate);
    }
    used.insert(candidate.clone());
    candidate
}
