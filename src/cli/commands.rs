//! Command implementation for the Nordic processor CLI
//!
//! Sets up logging, resolves configuration and input files, drives the
//! processor with progress reporting and prints the run summary.

use crate::cli::args::{Args, OutputFormat};
use crate::processor::discovery::FileDiscovery;
use crate::processor::{FileReport, NordicProcessor, ProcessingStats};
use crate::validation::Diagnostic;

use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Per-file summary kept for the final report
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub events: usize,
    pub invalid_events: usize,
    pub phase_records: usize,
    pub dropped_lines: usize,
    pub diagnostics: Vec<LocatedDiagnostic>,
}

/// A diagnostic with the source line of its event
#[derive(Debug, Clone, Serialize)]
pub struct LocatedDiagnostic {
    pub event_line: usize,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

impl From<&FileReport> for FileSummary {
    fn from(report: &FileReport) -> Self {
        Self {
            path: report.path.clone(),
            events: report.events.len(),
            invalid_events: report.invalid_events(),
            phase_records: report.phase_records(),
            dropped_lines: report.dropped_lines(),
            diagnostics: report
                .events
                .iter()
                .flat_map(|event| {
                    event.diagnostics.iter().map(|diagnostic| LocatedDiagnostic {
                        event_line: event.first_line,
                        diagnostic: diagnostic.clone(),
                    })
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    stats: &'a ProcessingStats,
    files: &'a [FileSummary],
}

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Discover input files
/// 3. Process files with progress reporting
/// 4. Print the summary
pub fn run(args: Args) -> Result<ProcessingStats> {
    setup_logging(&args)?;

    info!("Starting Nordic processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args
        .build_config()
        .context("Failed to build configuration")?;
    debug!("Effective configuration: {:?}", config);

    let discovery = FileDiscovery::new(args.input_path.clone(), &config.file_patterns)?;
    let files = discovery
        .discover_files()
        .with_context(|| format!("Failed to discover input at {}", args.input_path.display()))?;
    info!("Processing {} files", files.len());

    let text_output = args.format == OutputFormat::Text && !args.quiet;
    if text_output {
        print_banner(&args, files.len());
    }

    let mut processor = NordicProcessor::new(config).with_input_root(args.input_path.clone());
    if let Some(output_dir) = args.export_dir() {
        processor = processor.with_output_dir(output_dir.clone());
    }

    let progress_bar = if args.show_progress() && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        pb.set_message("Processing files");
        Some(pb)
    } else {
        None
    };

    let mut summaries = Vec::with_capacity(files.len());
    let stats = processor.process_files(&files, progress_bar.as_ref(), |report| {
        summaries.push(FileSummary::from(report))
    });

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("All files processed");
    }

    match args.format {
        OutputFormat::Json => print_json_report(&stats, &summaries)?,
        OutputFormat::Text if !args.quiet => print_text_report(&stats, &summaries),
        OutputFormat::Text => {}
    }

    if stats.files_processed == 0 {
        anyhow::bail!("None of the {} input files could be processed", files.len());
    }

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nordic_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn print_banner(args: &Args, file_count: usize) {
    println!("{}", "Nordic bulletin processing".bright_green().bold());
    println!("  {} {}", "Input:".bright_cyan(), args.input_path.display());
    match args.export_dir() {
        Some(dir) => println!("  {} {}", "Output:".bright_cyan(), dir.display()),
        None => println!("  {} {}", "Output:".bright_cyan(), "none (validate only)"),
    }
    println!(
        "  {} {} files",
        "Found".bright_green(),
        file_count.to_string().bright_white().bold()
    );
}

fn print_text_report(stats: &ProcessingStats, summaries: &[FileSummary]) {
    for summary in summaries.iter().filter(|s| !s.diagnostics.is_empty()) {
        println!("\n{}", summary.path.display().to_string().bright_yellow());
        for located in &summary.diagnostics {
            println!(
                "  {} {}",
                format!("line {}:", located.event_line).bright_cyan(),
                located.diagnostic
            );
        }
    }

    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
        for failure in &stats.failures {
            println!("    {} {}", failure.path.display(), failure.reason.red());
        }
    }
    println!(
        "  {} {}",
        "Events parsed:".bright_cyan(),
        stats.events_parsed.to_string().bright_white().bold()
    );
    if stats.events_invalid > 0 {
        println!(
            "  {} {} ({} diagnostics)",
            "Invalid events:".bright_red(),
            stats.events_invalid.to_string().bright_red().bold(),
            stats.diagnostics
        );
    }
    for (header_type, count) in &stats.headers_by_type {
        println!(
            "  {} {}",
            format!("{} headers:", header_type).bright_cyan(),
            count.to_string().bright_white()
        );
    }
    println!(
        "  {} {}",
        "Phase records:".bright_cyan(),
        stats.phase_records.to_string().bright_white()
    );
    if stats.dropped_lines > 0 {
        println!(
            "  {} {}",
            "Dropped header lines:".bright_yellow(),
            stats.dropped_lines.to_string().bright_yellow()
        );
    }
    if stats.files_exported > 0 {
        println!(
            "  {} {}",
            "Files exported:".bright_cyan(),
            stats.files_exported.to_string().bright_white()
        );
    }
}

fn print_json_report(stats: &ProcessingStats, summaries: &[FileSummary]) -> Result<()> {
    let report = JsonReport {
        stats,
        files: summaries,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
