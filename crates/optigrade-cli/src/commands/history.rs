//! The `optigrade history` subcommands.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use optigrade_history::HistoryStore;

pub fn list(store: &HistoryStore) -> Result<()> {
    let records = store.list()?;
    if records.is_empty() {
        println!("No saved attempts.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Title", "Score", "Band", "C/W/E", "Date", "File"]);
    for saved in &records {
        let r = &saved.record;
        table.add_row(vec![
            Cell::new(&r.title),
            Cell::new(format!("{:.1}", r.score)),
            Cell::new(r.band()),
            Cell::new(format!("{}/{}/{}", r.correct, r.wrong, r.empty)),
            Cell::new(&r.date),
            Cell::new(saved.file_name()),
        ]);
    }
    println!("{table}");
    println!("{} saved attempt(s)", records.len());
    Ok(())
}

pub fn show(store: &HistoryStore, file: &Path) -> Result<()> {
    let record = store.load(file)?;

    println!("Title:       {}", record.title);
    println!("Date:        {}", record.date);
    println!("Score:       {:.1}/100 ({})", record.score, record.band());
    println!(
        "Counts:      {} correct, {} wrong, {} empty",
        record.correct, record.wrong, record.empty
    );
    println!("Wrong ratio: {}", record.wrong_ratio);

    let mut table = Table::new();
    table.set_header(vec!["#", "Picked", "Mark", "Detail"]);
    for q in &record.questions {
        table.add_row(vec![
            Cell::new(q.number),
            Cell::new(
                q.selected_option
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(q.state),
            Cell::new(q.describe()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn delete(store: &HistoryStore, file: &Path) -> Result<()> {
    store.delete(file)?;
    println!("Deleted {}.", file.display());
    Ok(())
}

pub fn clear(store: &HistoryStore, force: bool) -> Result<()> {
    if !force {
        anyhow::bail!("this deletes every saved attempt; pass --force to proceed");
    }

    let outcome = store.delete_all()?;
    println!("Deleted {} record(s).", outcome.deleted);
    if outcome.failed > 0 {
        println!("{} record(s) could not be deleted.", outcome.failed);
    }
    Ok(())
}
