//! The `optigrade save` command.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use optigrade_core::GradeError;
use optigrade_history::{AttemptRecord, HistoryStore};

use crate::session;

pub fn execute(session_path: &Path, store: &HistoryStore) -> Result<()> {
    let mut attempt = session::load(session_path)?;

    if !attempt.is_completed() {
        return Err(GradeError::NotCompleted.into());
    }
    if attempt.is_saved() {
        return Err(GradeError::AlreadySaved.into());
    }

    // One instant for both the record date and the filename stamp. The
    // record is written before the saved flag flips, so a failed write
    // leaves the attempt re-savable.
    let now = Local::now();
    let record = AttemptRecord::from_attempt(&attempt, now);
    let path = store
        .save(&record, now)
        .context("failed to save attempt record")?;

    attempt.mark_saved()?;
    session::store(session_path, &attempt)?;

    println!("Saved attempt to {}", path.display());
    println!("{}", attempt.tally());
    Ok(())
}
