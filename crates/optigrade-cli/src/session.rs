//! Session file: the in-progress attempt, serialized between invocations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use optigrade_core::Attempt;

/// Load the current attempt, with a hint when none has been started.
pub fn load(path: &Path) -> Result<Attempt> {
    let content = fs::read_to_string(path).with_context(|| {
        format!(
            "no active attempt at {} (run `optigrade new` to start one)",
            path.display()
        )
    })?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse session file {}", path.display()))
}

/// Load the current attempt if a readable one exists.
///
/// A corrupt session file is reported as absent (with a warning) so `new`
/// can replace it rather than wedging the user.
pub fn peek(path: &Path) -> Option<Attempt> {
    if !path.exists() {
        return None;
    }
    match load(path) {
        Ok(attempt) => Some(attempt),
        Err(e) => {
            tracing::warn!("ignoring unreadable session file: {e:#}");
            None
        }
    }
}

/// Write the attempt back to the session file.
pub fn store(path: &Path, attempt: &Attempt) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(attempt).context("failed to serialize attempt")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write session file {}", path.display()))
}
