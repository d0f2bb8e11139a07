//! Output
//!
//! Serializes decisions into the JSON document the host reads back.

use std::io::Write;

use serde_json::Value;
use thiserror::Error;

use crate::discounts::Decision;

/// Errors raised while emitting a decision.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The decision could not be serialized or written.
    #[error("failed to write decision: {0}")]
    Json(#[from] serde_json::Error),

    /// The writer could not be flushed.
    #[error("failed to flush decision: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a decision to a JSON value.
///
/// # Errors
///
/// Returns `OutputError::Json` if serialization fails.
pub fn to_value(decision: &Decision) -> Result<Value, OutputError> {
    Ok(serde_json::to_value(decision)?)
}

/// Serialize a decision to a compact JSON string.
///
/// # Errors
///
/// Returns `OutputError::Json` if serialization fails.
pub fn to_string(decision: &Decision) -> Result<String, OutputError> {
    Ok(serde_json::to_string(decision)?)
}

/// Write a decision as JSON followed by a newline, then flush.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write<W: Write + ?Sized>(
    writer: &mut W,
    decision: &Decision,
    pretty: bool,
) -> Result<(), OutputError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, decision)?;
    } else {
        serde_json::to_writer(&mut *writer, decision)?;
    }

    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
