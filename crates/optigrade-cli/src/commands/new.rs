//! The `optigrade new` command.

use std::path::Path;

use anyhow::Result;

use optigrade_core::Attempt;

use crate::config::CliConfig;
use crate::session;

pub fn execute(
    session_path: &Path,
    config: &CliConfig,
    title: Option<String>,
    wrong_ratio: Option<u32>,
    force: bool,
) -> Result<()> {
    if !force {
        if let Some(current) = session::peek(session_path) {
            if current.is_completed() && !current.is_saved() {
                anyhow::bail!(
                    "the current attempt \"{}\" is finished but not saved; \
                     save it or pass --force to discard it",
                    current.title()
                );
            }
        }
    }

    let title = title.unwrap_or_else(|| config.default_title.clone());
    let ratio = wrong_ratio.unwrap_or(config.default_wrong_ratio);
    let attempt = Attempt::with_wrong_ratio(title, ratio)?;

    session::store(session_path, &attempt)?;
    println!(
        "Started attempt \"{}\" (wrong ratio {})",
        attempt.title(),
        attempt.wrong_ratio()
    );
    Ok(())
}
