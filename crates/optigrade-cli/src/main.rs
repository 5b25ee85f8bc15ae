//! optigrade CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod session;

#[derive(Parser)]
#[command(name = "optigrade", version, about = "Answer-sheet grading with a persisted attempt history")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Session file holding the in-progress attempt
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    /// Directory holding saved attempt records
    #[arg(long, global = true)]
    history_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a fresh attempt, discarding the current one
    New {
        /// Attempt title
        #[arg(long)]
        title: Option<String>,

        /// How many wrong marks offset one correct mark (2-5)
        #[arg(long)]
        wrong_ratio: Option<u32>,

        /// Discard a finished-but-unsaved attempt without complaint
        #[arg(long)]
        force: bool,
    },

    /// Record the solver's pick on a question
    Pick {
        /// Question number (1-20)
        question: u8,

        /// Option letter (A-E)
        choice: String,
    },

    /// Apply a grading mark to a question
    Mark {
        /// Question number (1-20)
        question: u8,

        /// Mark kind: correct, wrong, or empty
        kind: String,
    },

    /// Rename the current attempt
    Title {
        /// New title
        text: String,
    },

    /// Change the wrong ratio of the current attempt
    Ratio {
        /// New ratio (2-5)
        value: u32,
    },

    /// Show the sheet and, once finished, the score
    Status,

    /// Finish the attempt: lock the sheet and expose the score
    Finish,

    /// Save the finished attempt into the history
    Save,

    /// Wipe every selection and mark, keeping title and ratio
    Clear {
        /// Skip the confirmation guard
        #[arg(long)]
        force: bool,
    },

    /// Inspect and manage saved attempts
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Create a starter optigrade.toml
    Init,
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List saved attempts, newest first
    List,

    /// Show one saved attempt in detail
    Show {
        /// Record file name (as shown by `history list`)
        file: PathBuf,
    },

    /// Delete one saved attempt
    Delete {
        /// Record file name (as shown by `history list`)
        file: PathBuf,
    },

    /// Delete every saved attempt
    Clear {
        /// Skip the confirmation guard
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("optigrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;
    let session_path = cli.session.unwrap_or_else(|| config.session_file.clone());
    let history_dir = cli
        .history_dir
        .unwrap_or_else(|| config.history_dir.clone());
    let store = optigrade_history::HistoryStore::new(history_dir);

    match cli.command {
        Commands::New {
            title,
            wrong_ratio,
            force,
        } => commands::new::execute(&session_path, &config, title, wrong_ratio, force),
        Commands::Pick { question, choice } => {
            commands::pick::execute(&session_path, question, &choice)
        }
        Commands::Mark { question, kind } => {
            commands::mark::execute(&session_path, question, &kind)
        }
        Commands::Title { text } => commands::title::execute(&session_path, &text),
        Commands::Ratio { value } => commands::ratio::execute(&session_path, value),
        Commands::Status => commands::status::execute(&session_path),
        Commands::Finish => commands::finish::execute(&session_path),
        Commands::Save => commands::save::execute(&session_path, &store),
        Commands::Clear { force } => commands::clear::execute(&session_path, force),
        Commands::History { command } => match command {
            HistoryCommands::List => commands::history::list(&store),
            HistoryCommands::Show { file } => commands::history::show(&store, &file),
            HistoryCommands::Delete { file } => commands::history::delete(&store, &file),
            HistoryCommands::Clear { force } => commands::history::clear(&store, force),
        },
        Commands::Init => commands::init::execute(),
    }
}
