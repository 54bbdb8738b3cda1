//! Summary command: voyage header and bay plan statistics

use super::shared::{CommandStats, or_dash, read_bay_plan};
use crate::app::models::{Conflict, Voyage};
use crate::app::services::baplie_parser::{BayPlan, ParseStats};
use crate::app::services::code_lookup::{format_port, port_name};
use crate::app::services::statistics::StatisticsSnapshot;
use crate::cli::args::{OutputFormat, SummaryArgs};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// JSON document written by `summary --format json`
#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub voyage: &'a Voyage,
    pub statistics: StatisticsSnapshot,
    pub destinations: Vec<String>,
    pub bays: Vec<u16>,
    pub conflicts: &'a [Conflict],
    pub parse: &'a ParseStats,
}

impl<'a> SummaryReport<'a> {
    pub fn new(plan: &'a BayPlan, config: &Config) -> Self {
        Self {
            voyage: &plan.voyage,
            statistics: plan.statistics(&config.statistics),
            destinations: plan.destinations(),
            bays: plan.bays(),
            conflicts: &plan.conflicts,
            parse: &plan.stats,
        }
    }
}

pub async fn run_summary(args: SummaryArgs, config: &Config) -> Result<CommandStats> {
    if args.format == OutputFormat::Csv {
        return Err(Error::configuration(
            "summary output supports the human and json formats",
        ));
    }

    let start_time = Instant::now();
    let plan = read_bay_plan(config, &args.file).await?;
    let report = SummaryReport::new(&plan, config);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human | OutputFormat::Csv => print_human_summary(&report),
    }

    let stats = CommandStats::for_plan(&plan, start_time.elapsed());
    info!(
        "Summary completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );
    Ok(stats)
}

fn print_human_summary(report: &SummaryReport<'_>) {
    let voyage = report.voyage;

    println!("{}", "Voyage".bright_green().bold());
    println!(
        "  {} {}",
        "Vessel:".bright_cyan(),
        or_dash(&voyage.vessel_name).bright_white().bold()
    );
    println!(
        "  {} {}",
        "Voyage:".bright_cyan(),
        or_dash(&voyage.voyage_number)
    );
    println!(
        "  {} {}",
        "From:".bright_cyan(),
        or_dash(&format_port(&voyage.port_origin).formatted)
    );
    println!(
        "  {} {}",
        "To:".bright_cyan(),
        or_dash(&format_port(&voyage.port_destination).formatted)
    );
    println!(
        "  {} {}",
        "ETA:".bright_cyan(),
        or_dash(&voyage.arrival_date)
    );
    println!(
        "  {} {}",
        "Transmitted:".bright_cyan(),
        or_dash(&voyage.transmission_date)
    );

    let statistics = &report.statistics;
    println!("\n{}", "Bay Plan".bright_green().bold());
    let total = statistics.total_containers.to_string();
    println!(
        "  {} {}",
        "Containers:".bright_cyan(),
        total.bright_white().bold()
    );
    println!(
        "  {} {}",
        "Total weight (t):".bright_cyan(),
        statistics.formatted_total_weight().bright_white()
    );
    println!(
        "  {} {}",
        "Reefers:".bright_cyan(),
        statistics.reefer_containers.to_string().bright_blue()
    );
    if statistics.damaged_containers > 0 {
        let damaged = statistics.damaged_containers.to_string();
        println!(
            "  {} {}",
            "Damaged:".bright_red(),
            damaged.bright_red().bold()
        );
    }

    if !statistics.destination_counts.is_empty() {
        println!("\n{}", "Destinations".bright_green().bold());
        for (destination, count) in &statistics.destination_counts {
            println!("  {:<32} {}", port_name(destination), count);
        }
    }

    if !report.conflicts.is_empty() {
        println!("\n{}", "Reconciliation".bright_yellow().bold());
        for conflict in report.conflicts {
            println!("  {}", conflict.to_string().yellow());
        }
    }

    if !report.parse.is_clean() {
        println!(
            "\n{} {} degraded fields, {} dropped carriers, {} orphaned fields",
            "Warning:".bright_yellow().bold(),
            report.parse.degraded_fields,
            report.parse.carriers_dropped,
            report.parse.orphaned_fields
        );
    }
}
