//! Reconciliation result structure

use crate::app::models::{Conflict, Container};

/// Result of reconciling a container list
#[derive(Debug, Clone, Default)]
pub struct ReconciliationResult {
    /// Containers kept, in original order
    pub containers: Vec<Container>,
    /// Containers dropped, in the order they were encountered
    pub conflicts: Vec<Conflict>,
}

impl ReconciliationResult {
    pub fn new(containers: Vec<Container>, conflicts: Vec<Conflict>) -> Self {
        Self {
            containers,
            conflicts,
        }
    }

    /// Number of containers dropped for repeating a container number
    pub fn identity_conflicts(&self) -> usize {
        self.conflicts
            .iter()
            .filter(|c| matches!(c, Conflict::DuplicateIdentity { .. }))
            .count()
    }

    /// Number of containers dropped for claiming an occupied cell
    pub fn position_conflicts(&self) -> usize {
        self.conflicts
            .iter()
            .filter(|c| matches!(c, Conflict::DuplicatePosition { .. }))
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Reconciliation: {} containers kept, {} dropped ({} duplicate identities, {} duplicate positions)",
            self.containers.len(),
            self.conflicts.len(),
            self.identity_conflicts(),
            self.position_conflicts()
        )
    }
}
