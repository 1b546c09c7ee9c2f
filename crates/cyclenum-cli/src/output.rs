//! Shared stdout helpers for command output.
//!
//! Human output is written line by line by each command. JSON output is a
//! single pretty-printed object followed by a newline.

use std::io::Write;

use serde::Serialize;

use crate::error::CliError;

/// Writes `value` to `w` as pretty-printed JSON plus a trailing newline.
///
/// # Errors
///
/// Returns [`CliError::OutputFailed`] if serialization or the write fails,
/// or [`CliError::OutputClosed`] if stdout was closed.
pub fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *w, value).map_err(std::io::Error::from)?;
    writeln!(w)?;
    Ok(())
}

/// Writes one `label value` line with the label padded to a fixed column.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn write_field<W: Write, V: std::fmt::Display>(
    w: &mut W,
    label: &str,
    value: V,
) -> std::io::Result<()> {
    writeln!(w, "{:<28}{value}", format!("{label}:"))
}
