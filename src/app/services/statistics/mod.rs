//! Statistics and query facade over a parsed container list
//!
//! Everything here is computed on demand from an immutable container slice;
//! nothing is cached between calls.
//!
//! - [`summary`] - Totals, reefer/damaged counts and the destination histogram
//! - [`query`] - Destination and bay listings, container filtering

pub mod query;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use query::{ContainerFilter, StatusFilter, unique_bays, unique_destinations};
pub use summary::{StatisticsSnapshot, compute_statistics};
