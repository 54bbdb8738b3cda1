//! Parsing statistics and result structures for BAPLIE processing
//!
//! This module provides the parse result handed to callers and the counters
//! collected while dispatching segments.

use crate::app::models::{Conflict, Container, Voyage};
use crate::app::services::statistics::{
    ContainerFilter, StatisticsSnapshot, compute_statistics, unique_bays, unique_destinations,
};
use crate::config::StatisticsConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Order in which a message places container segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOrder {
    /// BAPLIE 2.1: `EQD` precedes its `LOC`/`MEA`/`TMP` segments
    EquipmentFirst,
    /// BAPLIE 2.0/2.2: `LOC+147` opens the group and `EQD` follows
    LocationFirst,
}

/// Parsed bay plan: voyage, reconciled containers and diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct BayPlan {
    pub voyage: Voyage,

    /// Containers in message order, duplicates removed
    pub containers: Vec<Container>,

    /// Containers dropped during reconciliation
    pub conflicts: Vec<Conflict>,

    pub stats: ParseStats,
}

impl BayPlan {
    /// Statistics with the given presentation settings
    pub fn statistics(&self, config: &StatisticsConfig) -> StatisticsSnapshot {
        compute_statistics(&self.containers, config)
    }

    /// Statistics with default settings (tonnes, "Unknown" destination key)
    pub fn get_statistics(&self) -> StatisticsSnapshot {
        self.statistics(&StatisticsConfig::default())
    }

    /// Sorted, non-empty destination port codes
    pub fn destinations(&self) -> Vec<String> {
        unique_destinations(&self.containers)
    }

    /// Sorted bay numbers that hold at least one container
    pub fn bays(&self) -> Vec<u16> {
        unique_bays(&self.containers)
    }

    /// Copy of the containers matching `filter`
    pub fn filter(&self, filter: &ContainerFilter) -> Vec<Container> {
        filter.apply(&self.containers)
    }

    /// Look up a container by number
    pub fn container(&self, container_number: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|c| c.container_number == container_number)
    }
}

/// Counters collected while dispatching segments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of segments after tokenization
    pub total_segments: usize,

    /// Segments per recognized tag
    pub segment_counts: BTreeMap<String, usize>,

    /// Segments with a tag the parser does not handle
    pub unrecognized_segments: usize,

    /// Number of `EQD` segments seen, before reconciliation
    pub containers_parsed: usize,

    /// Field values that could not be read and fell back to defaults
    pub degraded_fields: usize,

    /// Carrier segments dropped because no container was open
    pub carriers_dropped: usize,

    /// Buffered field updates discarded without reaching a container
    pub orphaned_fields: usize,

    /// Detected container segment order
    pub segment_order: Option<SegmentOrder>,

    /// Messages describing degraded fields, for debugging
    pub warnings: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a segment under its tag
    pub fn record_segment(&mut self, tag: &str) {
        *self.segment_counts.entry(tag.to_string()).or_insert(0) += 1;
    }

    /// Record a field value that could not be read
    pub fn record_degraded(&mut self, message: String) {
        self.degraded_fields += 1;
        self.warnings.push(message);
    }

    /// Check if the message parsed without any degraded or dropped data
    pub fn is_clean(&self) -> bool {
        self.degraded_fields == 0 && self.carriers_dropped == 0 && self.orphaned_fields == 0
    }
}
