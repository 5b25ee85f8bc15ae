//! The `optigrade status` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use crate::session;

pub fn execute(session_path: &Path) -> Result<()> {
    let attempt = session::load(session_path)?;

    let state = if attempt.is_saved() {
        "finished, saved"
    } else if attempt.is_completed() {
        "finished, not saved"
    } else {
        "in progress"
    };
    println!(
        "\"{}\" — wrong ratio {}, {state}",
        attempt.title(),
        attempt.wrong_ratio()
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Picked", "Mark", "True answer"]);
    for q in attempt.questions() {
        table.add_row(vec![
            Cell::new(q.number),
            Cell::new(q.selected.map(|c| c.to_string()).unwrap_or_default()),
            Cell::new(q.mark),
            Cell::new(
                q.correct_answer
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            ),
        ]);
    }
    println!("{table}");

    if attempt.is_completed() {
        println!("{}", attempt.tally());
    } else {
        println!("Attempt in progress; finish it to see the score.");
    }
    Ok(())
}
