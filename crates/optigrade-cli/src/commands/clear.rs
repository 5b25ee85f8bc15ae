//! The `optigrade clear` command.

use std::path::Path;

use anyhow::Result;

use crate::session;

pub fn execute(session_path: &Path, force: bool) -> Result<()> {
    let mut attempt = session::load(session_path)?;

    if attempt.has_entries() && !force {
        anyhow::bail!("this wipes every selection and mark; pass --force to proceed");
    }

    attempt.clear();
    session::store(session_path, &attempt)?;

    println!("Attempt cleared.");
    if attempt.is_completed() {
        // A finished attempt stays finished after clearing; show the
        // recomputed (all-empty) score.
        println!("{}", attempt.tally());
    }
    Ok(())
}
