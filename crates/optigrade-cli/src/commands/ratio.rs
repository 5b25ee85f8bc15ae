//! The `optigrade ratio` command.

use std::path::Path;

use anyhow::Result;

use crate::session;

pub fn execute(session_path: &Path, value: u32) -> Result<()> {
    let mut attempt = session::load(session_path)?;
    attempt.set_wrong_ratio(value)?;
    session::store(session_path, &attempt)?;
    println!("Wrong ratio set to {value}.");
    Ok(())
}
