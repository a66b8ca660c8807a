//! Error types for algotrace-vis.

use thiserror::Error;

/// Result type for vis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, running or exporting a trace.
#[derive(Debug, Error)]
pub enum Error {
    /// Algorithm name not in the catalog
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Bad environment variable or argument
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Engine rejected its input
    #[error("Engine error: {0}")]
    Engine(#[from] algotrace_engines::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
