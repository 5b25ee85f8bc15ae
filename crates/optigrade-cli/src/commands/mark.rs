//! The `optigrade mark` command.

use std::path::Path;

use anyhow::Result;

use optigrade_core::question::{MarkKind, MarkOutcome};

use crate::session;

pub fn execute(session_path: &Path, question: u8, kind: &str) -> Result<()> {
    let kind: MarkKind = kind.parse().map_err(anyhow::Error::msg)?;
    let mut attempt = session::load(session_path)?;

    match attempt.mark(question, kind)? {
        MarkOutcome::Marked => {
            println!("Question {question}: marked {kind}.");
        }
        MarkOutcome::Reverted => {
            println!("Question {question}: mark removed.");
        }
    }

    session::store(session_path, &attempt)?;
    if attempt.is_completed() {
        println!("{}", attempt.tally());
    }
    Ok(())
}
