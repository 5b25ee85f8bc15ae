//! CLI configuration.
//!
//! Everything here has a working default so the binary runs without any
//! config file. The history directory is the one setting with an
//! environment override, since tests and scripts point it somewhere
//! disposable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level optigrade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory holding saved attempt records.
    #[serde(default = "default_history_dir")]
    pub history_dir: PathBuf,
    /// File holding the in-progress attempt between invocations.
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    /// Wrong ratio for new attempts.
    #[serde(default = "default_wrong_ratio")]
    pub default_wrong_ratio: u32,
    /// Title for new attempts started without `--title`.
    #[serde(default = "default_title")]
    pub default_title: String,
}

fn default_history_dir() -> PathBuf {
    PathBuf::from("./optigrade-history")
}
fn default_session_file() -> PathBuf {
    PathBuf::from("./.optigrade-session.json")
}
fn default_wrong_ratio() -> u32 {
    optigrade_core::DEFAULT_WRONG_RATIO
}
fn default_title() -> String {
    "New Test".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            history_dir: default_history_dir(),
            session_file: default_session_file(),
            default_wrong_ratio: default_wrong_ratio(),
            default_title: default_title(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `optigrade.toml` in the current directory
/// 2. `~/.config/optigrade/config.toml`
///
/// Environment override: `OPTIGRADE_HISTORY_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<CliConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("optigrade.toml");
        if local.exists() {
            Some(local)
        } else if let Some(global) = global_config_path() {
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<CliConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => CliConfig::default(),
    };

    if let Ok(dir) = std::env::var("OPTIGRADE_HISTORY_DIR") {
        config.history_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join("optigrade")
            .join("config.toml")
    })
}
