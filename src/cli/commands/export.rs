//! Export command: write the container list to CSV

use super::shared::{CommandStats, read_bay_plan};
use crate::Result;
use crate::app::services::csv_export::{ExportDialect, export_to_path};
use crate::cli::args::ExportArgs;
use crate::config::Config;
use colored::*;
use std::time::Instant;

pub async fn run_export(args: ExportArgs, config: &Config) -> Result<CommandStats> {
    let start_time = Instant::now();
    let plan = read_bay_plan(config, &args.file).await?;

    let dialect = if args.spreadsheet {
        ExportDialect::Spreadsheet
    } else {
        ExportDialect::Csv
    };
    let rows = export_to_path(&args.output, &plan.containers, dialect)?;

    println!(
        "{} {} containers to {}",
        "Exported".bright_green().bold(),
        rows.to_string().bright_white().bold(),
        args.output.display()
    );

    Ok(CommandStats::for_plan(&plan, start_time.elapsed()))
}
