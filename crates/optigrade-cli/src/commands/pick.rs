//! The `optigrade pick` command.

use std::path::Path;

use anyhow::Result;

use optigrade_core::question::{Choice, SelectOutcome};

use crate::session;

pub fn execute(session_path: &Path, question: u8, choice: &str) -> Result<()> {
    let choice: Choice = choice.parse().map_err(anyhow::Error::msg)?;
    let mut attempt = session::load(session_path)?;

    let outcome = attempt.select(question, choice)?;
    match outcome {
        SelectOutcome::Rejected => {
            println!("Question {question} is locked; selection unchanged.");
        }
        SelectOutcome::Selected => {
            println!("Question {question}: picked {choice}.");
        }
        SelectOutcome::Cleared => {
            println!("Question {question}: selection cleared.");
        }
        SelectOutcome::TrueAnswerRecorded => {
            println!(
                "Question {question}: recorded {choice} as the true answer; the wrong mark stays."
            );
        }
    }

    if outcome.accepted() {
        session::store(session_path, &attempt)?;
        if attempt.is_completed() {
            println!("{}", attempt.tally());
        }
    }
    Ok(())
}
