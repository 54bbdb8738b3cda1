//! Containers command: filtered container listing

use super::shared::{CommandStats, display_temperature, display_weight, or_dash, read_bay_plan};
use crate::Result;
use crate::app::models::{Container, ContainerStatus};
use crate::app::services::csv_export::write_containers;
use crate::app::services::statistics::ContainerFilter;
use crate::cli::args::{ContainersArgs, OutputFormat};
use crate::config::Config;
use colored::*;
use std::time::Instant;
use tracing::debug;

/// Build the container filter from command arguments
pub fn build_filter(args: &ContainersArgs) -> ContainerFilter {
    ContainerFilter {
        search: args.search.clone(),
        destination: args.destination.clone(),
        status: args.status.map(Into::into),
    }
}

pub async fn run_containers(args: ContainersArgs, config: &Config) -> Result<CommandStats> {
    let start_time = Instant::now();
    let plan = read_bay_plan(config, &args.file).await?;

    let filter = build_filter(&args);
    let containers = plan.filter(&filter);
    debug!(
        "{} of {} containers match {:?}",
        containers.len(),
        plan.containers.len(),
        filter
    );

    match args.format {
        OutputFormat::Human => print_container_table(&containers, plan.containers.len()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&containers)?),
        OutputFormat::Csv => write_containers(std::io::stdout().lock(), &containers)?,
    }

    Ok(CommandStats::for_plan(&plan, start_time.elapsed()))
}

fn print_container_table(containers: &[Container], total: usize) {
    println!(
        "{}",
        format!(
            "{:>4}  {:<12} {:<5} {:>7} {:>9} {:<6} {:<6} {:>6}  {:<8} {}",
            "No", "Container", "Type", "Cell", "Weight", "From", "To", "Temp", "Status", "Cargo"
        )
        .bright_cyan()
        .bold()
    );

    for (index, container) in containers.iter().enumerate() {
        let status = match container.status {
            ContainerStatus::Ok => container.status.as_str().green(),
            ContainerStatus::Damaged => container.status.as_str().bright_red().bold(),
            ContainerStatus::Reefer => container.status.as_str().bright_blue(),
        };

        println!(
            "{:>4}  {:<12} {:<5} {:>7} {:>9} {:<6} {:<6} {:>6}  {:<8} {}",
            index + 1,
            container.container_number,
            container.container_type,
            or_dash(&container.position.raw),
            display_weight(container.weight),
            or_dash(&container.port_origin),
            or_dash(&container.port_destination),
            display_temperature(container.temperature),
            status,
            or_dash(&container.cargo_type)
        );
    }

    println!(
        "\n{} of {} containers shown",
        containers.len().to_string().bright_white().bold(),
        total
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::statistics::StatusFilter;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;

    #[test]
    fn test_build_filter() {
        let args = Args::parse_from([
            "baplie-processor",
            "containers",
            "plan.edi",
            "--destination",
            "USLAX",
            "--status",
            "damaged",
        ]);
        let Some(Commands::Containers(containers)) = args.command else {
            panic!("expected containers command");
        };

        let filter = build_filter(&containers);

        assert_eq!(filter.search, None);
        assert_eq!(filter.destination.as_deref(), Some("USLAX"));
        assert_eq!(filter.status, Some(StatusFilter::Damaged));
    }
}
