//! Command implementations for the BAPLIE processor CLI
//!
//! Each command is implemented in its own module. Shared setup (logging,
//! layered configuration, file parsing) lives in [`shared`].

pub mod containers;
pub mod export;
pub mod shared;
pub mod summary;
pub mod validate;

pub use shared::CommandStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};
use tracing::debug;

/// Main command runner for the BAPLIE processor
///
/// Loads configuration, initializes logging and dispatches to the
/// subcommand handler:
/// - `summary`: voyage header and statistics
/// - `containers`: filtered container listing
/// - `export`: CSV export of the container list
/// - `validate`: batch parsing of files or directories
pub async fn run(args: Args) -> Result<CommandStats> {
    let config = shared::load_configuration(&args)?;
    shared::setup_logging(&config.logging.level, args.quiet)?;
    debug!("Configuration: {:?}", config);

    let show_progress = args.show_progress();
    let command = args
        .command
        .ok_or_else(|| Error::configuration("No command given"))?;

    match command {
        Commands::Summary(summary_args) => summary::run_summary(summary_args, &config).await,
        Commands::Containers(containers_args) => {
            containers::run_containers(containers_args, &config).await
        }
        Commands::Export(export_args) => export::run_export(export_args, &config).await,
        Commands::Validate(validate_args) => {
            validate::run_validate(validate_args, &config, show_progress).await
        }
    }
}
