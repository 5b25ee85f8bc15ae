//! The `optigrade finish` command.

use std::path::Path;

use anyhow::Result;

use crate::session;

pub fn execute(session_path: &Path) -> Result<()> {
    let mut attempt = session::load(session_path)?;
    let tally = attempt.finish()?;
    session::store(session_path, &attempt)?;

    println!("Attempt \"{}\" finished.", attempt.title());
    println!("{tally}");
    Ok(())
}
