//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the command implementations.

use crate::Result;
use crate::app::services::baplie_parser::{BaplieParser, BayPlan};
use crate::cli::args::Args;
use crate::config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Run statistics reported back to `main`
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Number of files parsed successfully
    pub files_processed: usize,
    /// Number of files that failed to parse
    pub files_failed: usize,
    /// Containers kept after reconciliation, over all files
    pub containers: usize,
    /// Containers dropped during reconciliation, over all files
    pub conflicts: usize,
    pub processing_time: Duration,
}

impl CommandStats {
    /// Stats for a single parsed bay plan
    pub fn for_plan(plan: &BayPlan, processing_time: Duration) -> Self {
        Self {
            files_processed: 1,
            files_failed: 0,
            containers: plan.containers.len(),
            conflicts: plan.conflicts.len(),
            processing_time,
        }
    }
}

/// Set up structured logging
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("baplie_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    // Explicit path, else the default location if a file exists there
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if args.log_level_overridden() {
        config.logging.level = args.get_log_level().to_string();
    }
}

/// Read and parse one BAPLIE file
pub async fn read_bay_plan(config: &Config, path: &Path) -> Result<BayPlan> {
    let parser = BaplieParser::new(config);
    let plan = parser.parse_file(path).await?;

    info!(
        "{}: {} containers, {} conflicts",
        path.display(),
        plan.containers.len(),
        plan.conflicts.len()
    );
    Ok(plan)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let pb = ProgressBar::new(total);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Render an optional weight for display
pub fn display_weight(weight: Option<i64>) -> String {
    weight.map_or_else(|| "-".to_string(), |w| w.to_string())
}

/// Render an optional temperature for display
pub fn display_temperature(temperature: Option<f64>) -> String {
    temperature.map_or_else(|| "-".to_string(), |t| format!("{:.1}", t))
}

/// Substitute a dash for empty display values
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
