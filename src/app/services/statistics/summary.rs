//! Bay plan summary statistics

use crate::app::models::Container;
use crate::config::StatisticsConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics for a container list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub total_containers: usize,

    /// Sum of known weights divided by the configured divisor, rounded to 2 places
    pub total_weight: f64,

    /// Containers with a temperature reading
    pub reefer_containers: usize,

    /// Containers with status DAMAGED
    pub damaged_containers: usize,

    /// Container count per destination port
    pub destination_counts: BTreeMap<String, usize>,
}

impl StatisticsSnapshot {
    /// Total weight with exactly two decimals
    pub fn formatted_total_weight(&self) -> String {
        format!("{:.2}", self.total_weight)
    }

    /// Count for one destination, 0 when absent
    pub fn count_for_destination(&self, destination: &str) -> usize {
        self.destination_counts
            .get(destination)
            .copied()
            .unwrap_or(0)
    }
}

/// Compute summary statistics
///
/// Containers without a destination are counted under
/// `config.unknown_destination_label`.
pub fn compute_statistics(
    containers: &[Container],
    config: &StatisticsConfig,
) -> StatisticsSnapshot {
    let mut raw_weight: i64 = 0;
    let mut reefer_containers = 0;
    let mut damaged_containers = 0;
    let mut destination_counts = BTreeMap::new();

    for container in containers {
        raw_weight = raw_weight.saturating_add(container.weight.unwrap_or(0));

        if container.is_reefer() {
            reefer_containers += 1;
        }
        if container.is_damaged() {
            damaged_containers += 1;
        }

        let destination = if container.port_destination.is_empty() {
            config.unknown_destination_label.as_str()
        } else {
            container.port_destination.as_str()
        };
        *destination_counts
            .entry(destination.to_string())
            .or_insert(0) += 1;
    }

    StatisticsSnapshot {
        total_containers: containers.len(),
        total_weight: round_to_hundredths(raw_weight as f64 / config.weight_divisor),
        reefer_containers,
        damaged_containers,
        destination_counts,
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
