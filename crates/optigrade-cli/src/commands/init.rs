//! The `optigrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("optigrade.toml").exists() {
        println!("optigrade.toml already exists, skipping.");
    } else {
        std::fs::write("optigrade.toml", SAMPLE_CONFIG)?;
        println!("Created optigrade.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: optigrade new --title \"First attempt\"");
    println!("  2. Record picks and marks: optigrade pick 1 A; optigrade mark 1 correct");
    println!("  3. Run: optigrade finish && optigrade save");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# optigrade configuration

# Where saved attempt records live. One JSON file per attempt.
history_dir = "./optigrade-history"

# Where the in-progress attempt is kept between commands.
session_file = "./.optigrade-session.json"

# How many wrong marks offset one correct mark (2-5).
default_wrong_ratio = 4

# Title for attempts started without --title.
default_title = "New Test"
"#;
