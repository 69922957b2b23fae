//! Output formatting for parkit.
//!
//! This module renders command responses in the selected output format.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::command::Response;
use crate::error::ParkitError;

pub use json::*;
pub use pretty::*;

/// Format a response based on output format
///
/// # Errors
///
/// Returns `ParkitError::Parse` if JSON serialization fails.
pub fn format_response(response: &Response, format: OutputFormat) -> Result<String, ParkitError> {
    match format {
        OutputFormat::Pretty => Ok(format_response_pretty(response)),
        OutputFormat::Json => format_response_json(response),
    }
}
