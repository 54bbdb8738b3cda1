//! Container queries for filter population and display
//!
//! Filtering always returns a copy, leaving the parsed list untouched so it
//! can be filtered again from the full set.

use crate::app::models::{Container, ContainerStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Status criterion for [`ContainerFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Status OK
    Ok,
    /// Status DAMAGED
    Damaged,
    /// Any container with a temperature reading, whatever its status
    Reefer,
}

impl StatusFilter {
    pub fn matches(self, container: &Container) -> bool {
        match self {
            StatusFilter::Ok => container.status == ContainerStatus::Ok,
            StatusFilter::Damaged => container.status == ContainerStatus::Damaged,
            StatusFilter::Reefer => container.is_reefer(),
        }
    }
}

/// Search and filter criteria; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerFilter {
    /// Case-insensitive substring of the container number
    pub search: Option<String>,
    /// Exact destination port code
    pub destination: Option<String>,
    pub status: Option<StatusFilter>,
}

impl ContainerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Check a single container against every set criterion
    pub fn matches(&self, container: &Container) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => container
                .container_number
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        };

        let matches_destination = match self.destination.as_deref() {
            Some(destination) if !destination.is_empty() => {
                container.port_destination == destination
            }
            _ => true,
        };

        let matches_status = self.status.is_none_or(|status| status.matches(container));

        matches_search && matches_destination && matches_status
    }

    /// Copy of the matching containers, in their original order
    pub fn apply(&self, containers: &[Container]) -> Vec<Container> {
        containers
            .iter()
            .filter(|container| self.matches(container))
            .cloned()
            .collect()
    }
}

/// Sorted set of non-empty destination port codes
pub fn unique_destinations(containers: &[Container]) -> Vec<String> {
    containers
        .iter()
        .filter(|c| !c.port_destination.is_empty())
        .map(|c| c.port_destination.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted set of bay numbers for containers with a decomposed cell
pub fn unique_bays(containers: &[Container]) -> Vec<u16> {
    containers
        .iter()
        .filter_map(|c| c.position.slot.map(|slot| slot.bay))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
