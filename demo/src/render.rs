//! Text rendering of the operation log.

use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::error::DemoError;

/// Entries past this index are summarised as a count.
pub const MAX_RENDERED_ENTRIES: usize = 10;

/// Write `entries` to `out`. `None` and an empty slice print different
/// messages. Entries that fail to serialize are reported in place and the
/// rest are still rendered.
pub fn render_log<W: Write, E: Serialize>(out: &mut W, entries: Option<&[E]>) -> io::Result<()> {
    let Some(entries) = entries else {
        return writeln!(out, "   No log entries found (NULL response)");
    };

    writeln!(out, "   📋 Operation log ({} entries):", entries.len())?;
    if entries.is_empty() {
        return writeln!(out, "   (Log is empty)");
    }

    for (index, entry) in entries.iter().take(MAX_RENDERED_ENTRIES).enumerate() {
        let position = index + 1;
        match render_entry(entry) {
            Ok(Some(text)) => writeln!(out, "   {position}. {text}")?,
            Ok(None) => writeln!(out, "   {position}. (NULL log entry)")?,
            Err(e) => {
                warn!(position, error = %e, "log entry not rendered");
                writeln!(out, "   {position}. (Failed to serialize log entry)")?;
            }
        }
    }

    if entries.len() > MAX_RENDERED_ENTRIES {
        writeln!(out, "   ... and {} more entries", entries.len() - MAX_RENDERED_ENTRIES)?;
    }
    Ok(())
}

/// Pretty JSON for one entry, or `None` for a JSON `null`.
pub fn render_entry<E: Serialize>(entry: &E) -> Result<Option<String>, DemoError> {
    let value = serde_json::to_value(entry).map_err(|e| DemoError::SerializationFailure(e.to_string()))?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::to_string_pretty(&value)
        .map(Some)
        .map_err(|e| DemoError::SerializationFailure(e.to_string()))
}
