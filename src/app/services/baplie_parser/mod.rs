//! BAPLIE parser for EDIFACT bay plan messages
//!
//! This module turns an undifferentiated stream of EDIFACT segments into a
//! voyage record and an ordered list of fully-populated containers. Both
//! BAPLIE sub-formats are handled: 2.1, where `EQD` precedes its location and
//! measurement segments, and 2.0/2.2, where `LOC+147` opens the container group
//! and `EQD` follows.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`tokenizer`] - Delimiter resolution (`UNA`) and segment/element splitting
//! - [`segment`] - Typed segment variants read from raw elements
//! - [`field_parsers`] - Number and date/time conversion helpers
//! - [`pending`] - Container field updates and the pending buffer
//! - [`state`] - Segment dispatcher and parser state machine
//! - [`parser`] - Parse orchestration and file handling
//! - [`stats`] - Parse result and parsing statistics
//!
//! ## Usage
//!
//! ```rust
//! use baplie_processor::BaplieParser;
//!
//! let parser = BaplieParser::default();
//! let plan = parser
//!     .parse("LOC+5+ECGYE'EQD+CN+ABCU1234567+22G0'LOC+147+0130204'")
//!     .unwrap();
//!
//! assert_eq!(plan.containers.len(), 1);
//! assert_eq!(plan.containers[0].bay(), 13);
//! ```

pub mod field_parsers;
pub mod parser;
pub mod pending;
pub mod segment;
pub mod state;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::BaplieParser;
pub use pending::{ContainerField, PendingBuffer};
pub use segment::Segment;
pub use state::ParseState;
pub use stats::{BayPlan, ParseStats, SegmentOrder};
pub use tokenizer::{Delimiters, RawSegment};
