//! Container deduplication by identity and stowage position
//!
//! Containers are checked in order against the identifiers and cells already
//! kept. A container is dropped when its number was seen before, or when its
//! cell is already occupied. Containers without a decomposed cell, or with
//! a zero bay or tier placeholder, are never position conflicts.

use crate::app::models::{Conflict, Container};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use super::stats::ReconciliationResult;

/// Remove duplicate containers, keeping the first occurrence
///
/// # Arguments
///
/// * `containers` - Containers in message order
///
/// # Returns
///
/// Kept containers in their original order, plus one conflict per dropped container
pub fn reconcile_containers(containers: Vec<Container>) -> ReconciliationResult {
    let input_count = containers.len();
    let mut seen_numbers: HashSet<String> = HashSet::with_capacity(input_count);
    // position key -> container number that holds the cell
    let mut occupied: HashMap<String, String> = HashMap::with_capacity(input_count);
    let mut kept = Vec::with_capacity(input_count);
    let mut conflicts = Vec::new();

    for (index, container) in containers.into_iter().enumerate() {
        if seen_numbers.contains(&container.container_number) {
            let conflict = Conflict::DuplicateIdentity {
                container_number: container.container_number.clone(),
                index,
            };
            warn!("Reconciliation conflict: {}", conflict);
            conflicts.push(conflict);
            continue;
        }

        let slot_key = container.position.occupancy_key();
        if let Some(holder) = slot_key.as_ref().and_then(|key| occupied.get(key)) {
            let conflict = Conflict::DuplicatePosition {
                container_number: container.container_number.clone(),
                occupied_by: holder.clone(),
                position: container.position.raw.clone(),
                index,
            };
            warn!("Reconciliation conflict: {}", conflict);
            conflicts.push(conflict);
            continue;
        }

        seen_numbers.insert(container.container_number.clone());
        if let Some(key) = slot_key {
            occupied.insert(key, container.container_number.clone());
        }
        kept.push(container);
    }

    let result = ReconciliationResult::new(kept, conflicts);
    if result.is_clean() {
        debug!("{}", result.summary());
    } else {
        info!("{}", result.summary());
    }
    result
}
