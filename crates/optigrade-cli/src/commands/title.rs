//! The `optigrade title` command.

use std::path::Path;

use anyhow::Result;

use crate::session;

pub fn execute(session_path: &Path, text: &str) -> Result<()> {
    let mut attempt = session::load(session_path)?;
    attempt.set_title(text)?;
    session::store(session_path, &attempt)?;
    println!("Attempt renamed to \"{text}\".");
    Ok(())
}
