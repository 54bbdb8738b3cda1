//! BAPLIE Processor Library
//!
//! A Rust library for reading EDIFACT BAPLIE (bay plan / stowage plan) messages
//! into a structured voyage and container model.
//!
//! This library provides tools for:
//! - Tokenizing EDIFACT interchanges, including `UNA` service string advice
//! - Parsing both BAPLIE segment orders (2.1 equipment-first, 2.0/2.2 location-first)
//! - Reconciling duplicate container identities and stowage positions
//! - Computing bay plan statistics and filtered container views
//! - Translating port, container-type and cargo codes for presentation
//! - Exporting container tables as CSV

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod baplie_parser;
        pub mod code_lookup;
        pub mod csv_export;
        pub mod reconciler;
        pub mod statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Conflict, Container, ContainerStatus, Slot, StowagePosition, Voyage};
pub use app::services::baplie_parser::{BaplieParser, BayPlan};
pub use config::Config;

/// Result type alias for the BAPLIE processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for BAPLIE processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be split into segments
    #[error("Tokenization error: {message}")]
    Tokenization { message: String },

    /// Message-level parse failure
    #[error("Failed to parse BAPLIE message: {message}")]
    Parse { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// CSV export error
    #[error("Export error: {message}")]
    Export {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Serialization of command output failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a tokenization error
    pub fn tokenization(message: impl Into<String>) -> Self {
        Self::Tokenization {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a CSV export error
    pub fn export(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Export {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Export {
            message: "CSV writing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
