//! Core BAPLIE parser implementation
//!
//! This module provides the main parser orchestration: delimiter resolution,
//! tokenization, segment dispatch and reconciliation of the resulting
//! container list.

use std::path::Path;
use tracing::{debug, info, warn};

use super::state::ParseState;
use super::stats::BayPlan;
use super::tokenizer::{Delimiters, resolve_delimiters, tokenize};
use crate::app::services::reconciler::reconcile_containers;
use crate::config::Config;
use crate::{Error, Result};

/// BAPLIE parser for bay plan messages
///
/// The parser holds only configuration. Every call to [`BaplieParser::parse`]
/// builds its own state from scratch, so one instance can be reused for any
/// number of messages.
#[derive(Debug, Clone)]
pub struct BaplieParser {
    delimiters: Delimiters,
    honor_una: bool,
}

impl Default for BaplieParser {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl BaplieParser {
    /// Create a parser from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            delimiters: config.delimiters.into(),
            honor_una: config.parser.honor_una,
        }
    }

    /// Parse a complete BAPLIE message
    ///
    /// Individual malformed fields degrade to defaults and are reported in
    /// [`BayPlan::stats`]. The call fails only when the text cannot be
    /// tokenized; text without any BAPLIE segments yields an empty plan.
    pub fn parse(&self, content: &str) -> Result<BayPlan> {
        let (delimiters, body) = resolve_delimiters(content, self.delimiters, self.honor_una)?;
        let segments = tokenize(body, &delimiters);
        debug!("Tokenized {} segments", segments.len());

        let mut state = ParseState::new();
        for segment in &segments {
            state.dispatch(segment);
        }
        let output = state.finish();

        if output.stats.total_segments == output.stats.unrecognized_segments {
            debug!(
                "No BAPLIE segments among {} segments",
                output.stats.total_segments
            );
        }

        let reconciliation = reconcile_containers(output.containers);
        if !output.stats.is_clean() {
            warn!(
                "{} degraded fields, {} dropped carriers, {} orphaned fields",
                output.stats.degraded_fields,
                output.stats.carriers_dropped,
                output.stats.orphaned_fields
            );
        }

        info!(
            "Parsed voyage '{}': {} containers ({} conflicts)",
            output.voyage.voyage_number,
            reconciliation.containers.len(),
            reconciliation.conflicts.len()
        );

        Ok(BayPlan {
            voyage: output.voyage,
            containers: reconciliation.containers,
            conflicts: reconciliation.conflicts,
            stats: output.stats,
        })
    }

    /// Parse a message supplied as raw bytes
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<BayPlan> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            Error::tokenization(format!("Input is not valid UTF-8 text: {}", e))
        })?;
        self.parse(content)
    }

    /// Read and parse a BAPLIE file
    pub async fn parse_file(&self, file_path: &Path) -> Result<BayPlan> {
        info!("Parsing BAPLIE file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let bytes = tokio::fs::read(file_path).await.map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.parse_bytes(&bytes)
    }
}
