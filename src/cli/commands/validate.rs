//! Validate command: parse a file or a directory of BAPLIE files
//!
//! Every file is parsed independently; one failure does not stop the run.
//! The command fails at the end if any file could not be parsed.

use super::shared::{CommandStats, create_progress_bar};
use crate::app::services::baplie_parser::BaplieParser;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::Config;
use crate::constants::BAPLIE_FILE_EXTENSIONS;
use crate::{Error, Result};
use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Outcome of parsing one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub containers: usize,
    pub conflicts: usize,
    pub degraded_fields: usize,
    pub error: Option<String>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Check if a path has one of the BAPLIE file extensions
pub fn is_baplie_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            BAPLIE_FILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Discover BAPLIE files under `root`, or `root` itself when it is a file
pub fn discover_baplie_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.exists() {
        anyhow::bail!("Path not found: {}", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", root.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && is_baplie_file(path) {
            files.push(path.to_path_buf());
        }
    }

    // Sort files for consistent processing order
    files.sort();

    debug!(
        "Discovered {} BAPLIE files in {}",
        files.len(),
        root.display()
    );
    Ok(files)
}

async fn validate_file(parser: &BaplieParser, path: &Path) -> FileReport {
    match parser.parse_file(path).await {
        Ok(plan) => FileReport {
            path: path.to_path_buf(),
            containers: plan.containers.len(),
            conflicts: plan.conflicts.len(),
            degraded_fields: plan.stats.degraded_fields,
            error: None,
        },
        Err(e) => {
            warn!("{}: {}", path.display(), e);
            FileReport {
                path: path.to_path_buf(),
                containers: 0,
                conflicts: 0,
                degraded_fields: 0,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Parse every discovered file and collect one report per file
pub async fn validate_files(
    config: &Config,
    files: &[PathBuf],
    show_progress: bool,
) -> Vec<FileReport> {
    let parser = BaplieParser::new(config);
    let progress_bar = (show_progress && files.len() > 1)
        .then(|| create_progress_bar(files.len() as u64, "Validating"));

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        reports.push(validate_file(&parser, path).await);
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Validation completed");
    }
    reports
}

pub async fn run_validate(
    args: ValidateArgs,
    config: &Config,
    show_progress: bool,
) -> Result<CommandStats> {
    if args.format == OutputFormat::Csv {
        return Err(Error::configuration(
            "validate output supports the human and json formats",
        ));
    }
    if !args.path.exists() {
        return Err(Error::file_not_found(args.path.display().to_string()));
    }

    let start_time = Instant::now();

    let files = discover_baplie_files(&args.path).map_err(|e| {
        let message = format!("{:#}", e);
        match e.downcast::<walkdir::Error>() {
            Ok(walk_error) => Error::from(walk_error),
            Err(_) => Error::configuration(message),
        }
    })?;
    info!(
        "Validating {} files under {}",
        files.len(),
        args.path.display()
    );

    let reports = validate_files(config, &files, show_progress).await;

    let stats = CommandStats {
        files_processed: reports.iter().filter(|r| r.is_ok()).count(),
        files_failed: reports.iter().filter(|r| !r.is_ok()).count(),
        containers: reports.iter().map(|r| r.containers).sum(),
        conflicts: reports.iter().map(|r| r.conflicts).sum(),
        processing_time: start_time.elapsed(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Human | OutputFormat::Csv => print_validation_report(&reports, &stats),
    }

    if stats.files_failed > 0 {
        return Err(Error::parse(format!(
            "{} of {} files failed validation",
            stats.files_failed,
            reports.len()
        )));
    }

    Ok(stats)
}

fn print_validation_report(reports: &[FileReport], stats: &CommandStats) {
    for report in reports {
        match &report.error {
            None => println!(
                "  {} {} ({} containers, {} conflicts, {} degraded fields)",
                "OK".bright_green().bold(),
                report.path.display(),
                report.containers,
                report.conflicts,
                report.degraded_fields
            ),
            Some(error) => println!(
                "  {} {}: {}",
                "FAIL".bright_red().bold(),
                report.path.display(),
                error
            ),
        }
    }

    println!("\n{}", "Validation Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_millis().to_string().bright_white()
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
    }
    println!(
        "  {} {}",
        "Containers:".bright_cyan(),
        stats.containers.to_string().bright_white().bold()
    );
}
