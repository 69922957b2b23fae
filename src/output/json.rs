//! JSON output formatting for parkit.
//!
//! Each response becomes a single-line object tagged by `kind`, with the
//! pretty message attached as `message`.

use serde::Serialize;
use serde_json::Value;

use crate::command::Response;
use crate::error::ParkitError;

/// Format a response as one line of JSON
///
/// # Errors
///
/// Returns `ParkitError::Parse` if JSON serialization fails.
pub fn format_response_json(response: &Response) -> Result<String, ParkitError> {
    let mut value = serde_json::to_value(response)?;
    if let Value::Object(map) = &mut value {
        map.insert("message".to_string(), Value::String(response.to_string()));
    }
    to_json(&value)
}

/// Generic compact JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `ParkitError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ParkitError> {
    Ok(serde_json::to_string(value)?)
}
