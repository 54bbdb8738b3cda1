//! Command-line argument definitions for the BAPLIE processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::services::statistics::StatusFilter;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the BAPLIE bay plan processor
///
/// Reads EDIFACT BAPLIE stowage messages (2.0, 2.1 and 2.2) and reports the
/// voyage, its containers and summary statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "baplie-processor",
    version,
    about = "Inspect EDIFACT BAPLIE bay plan messages",
    long_about = "Parses EDIFACT BAPLIE vessel stowage messages in either segment order \
                  (EQD-first 2.1 or LOC-first 2.0/2.2), reconciles duplicate containers and \
                  reports voyage details, container listings and bay plan statistics."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides progress bars.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/baplie-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show the voyage header and bay plan statistics
    Summary(SummaryArgs),
    /// List containers, optionally filtered
    Containers(ContainersArgs),
    /// Write the container list to a CSV file
    Export(ExportArgs),
    /// Parse one file or a directory of files and report problems
    Validate(ValidateArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// BAPLIE file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct ContainersArgs {
    /// BAPLIE file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Case-insensitive container number substring
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Exact destination port code
    #[arg(short = 'd', long = "destination", value_name = "PORT")]
    pub destination: Option<String>,

    #[arg(long = "status", value_enum)]
    pub status: Option<StatusArg>,

    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// BAPLIE file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Destination CSV file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Write tab-separated values with a byte order mark for spreadsheets
    #[arg(long = "spreadsheet")]
    pub spreadsheet: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// BAPLIE file or directory to scan
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Status values accepted by `--status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Ok,
    Damaged,
    Reefer,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Ok => StatusFilter::Ok,
            StatusArg::Damaged => StatusFilter::Damaged,
            StatusArg::Reefer => StatusFilter::Reefer,
        }
    }
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
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
        !self.quiet
    }

    /// Check if the user asked for a specific log level
    pub fn log_level_overridden(&self) -> bool {
        self.quiet || self.verbose > 0
    }
}
