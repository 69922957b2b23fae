//! Error types for parkit.

use thiserror::Error;

/// Errors that abort a run.
///
/// Per-line rejections (lot full, unknown registration, invalid command) are not
/// errors at this level; they are reported as responses and the run continues.
#[derive(Error, Debug)]
pub enum ParkitError {
    /// Writing output failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A line of the command file could not be read.
    #[error("Error reading file: {0}")]
    Read(#[source] std::io::Error),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A response could not be serialized.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The program was invoked with the wrong arguments.
    #[error("{0}")]
    Usage(String),
}
