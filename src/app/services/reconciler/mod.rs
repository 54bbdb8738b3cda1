//! Container reconciliation for parsed bay plans
//!
//! Runs once after dispatch over the full container list in message order
//! and removes containers that repeat an earlier container number or claim a
//! stowage cell that is already occupied. The first occurrence wins in both
//! cases; every dropped container is recorded as a [`Conflict`] and logged,
//! but reconciliation never fails.
//!
//! [`Conflict`]: crate::app::models::Conflict

pub mod deduplication;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use deduplication::reconcile_containers;
pub use stats::ReconciliationResult;
