//! Directory-backed record store.
//!
//! One JSON file per saved attempt, named `<title>_<YYYYMMDD_HHMMSS>.json`.
//! The directory listing is the index; there is no index file and records
//! are never updated in place.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::record::AttemptRecord;

/// Errors from history storage operations, carrying the path involved.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to create history directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write record {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read record {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to list history directory {path}: {source}")]
    List { path: PathBuf, source: io::Error },

    #[error("failed to delete record {path}: {source}")]
    Delete { path: PathBuf, source: io::Error },

    #[error("record not found: {path}")]
    NotFound { path: PathBuf },
}

/// A record as returned by [`HistoryStore::list`].
#[derive(Debug, Clone)]
pub struct SavedRecord {
    /// Backing file. Doubles as the record's identity.
    pub path: PathBuf,
    /// File modification time, used for listing order.
    pub modified: SystemTime,
    /// Parsed record contents.
    pub record: AttemptRecord,
}

impl SavedRecord {
    /// The file name portion of the record's path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Outcome of a bulk delete. Partial failure is reported, not rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeOutcome {
    pub deleted: usize,
    pub failed: usize,
}

/// Store for saved attempt records in a single directory.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a record as a new file, creating the directory on first use.
    ///
    /// The filename combines the title with a second-precision timestamp;
    /// `create_new` guarantees an existing file is never overwritten, so a
    /// same-second collision surfaces as an error instead of data loss.
    pub fn save(
        &self,
        record: &AttemptRecord,
        at: DateTime<Local>,
    ) -> Result<PathBuf, HistoryError> {
        fs::create_dir_all(&self.dir).map_err(|source| HistoryError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let file_name = format!(
            "{}_{}.json",
            sanitize_title(&record.title),
            at.format("%Y%m%d_%H%M%S")
        );
        let path = self.dir.join(file_name);

        let json = serde_json::to_string_pretty(record).map_err(|e| HistoryError::Write {
            path: path.clone(),
            source: io::Error::other(e),
        })?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| HistoryError::Write {
                path: path.clone(),
                source,
            })?;
        file.write_all(json.as_bytes())
            .map_err(|source| HistoryError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "saved attempt record");
        Ok(path)
    }

    /// List all parseable records, most recently modified first.
    ///
    /// A file that cannot be read or parsed is skipped with a warning; it
    /// never aborts the rest of the listing. A missing directory is an
    /// empty history, not an error.
    pub fn list(&self) -> Result<Vec<SavedRecord>, HistoryError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|source| HistoryError::List {
            path: self.dir.clone(),
            source,
        })?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("skipping unreadable directory entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }

            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);

            match read_record(&path) {
                Ok(record) => records.push(SavedRecord {
                    path,
                    modified,
                    record,
                }),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "skipping corrupt record: {e}");
                }
            }
        }

        records.sort_by(|a, b| b.modified.cmp(&a.modified));
        Ok(records)
    }

    /// Load one record by file name (or absolute path).
    pub fn load(&self, name: &Path) -> Result<AttemptRecord, HistoryError> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(HistoryError::NotFound { path });
        }
        read_record(&path).map_err(|source| HistoryError::Read {
            path: path.clone(),
            source,
        })
    }

    /// Delete exactly one record's backing file.
    pub fn delete(&self, name: &Path) -> Result<(), HistoryError> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(HistoryError::NotFound { path });
        }
        fs::remove_file(&path).map_err(|source| HistoryError::Delete {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "deleted attempt record");
        Ok(())
    }

    /// Delete every record file currently in the directory.
    ///
    /// Not atomic: files that fail to delete are counted and left behind
    /// while the rest proceed.
    pub fn delete_all(&self) -> Result<PurgeOutcome, HistoryError> {
        if !self.dir.exists() {
            return Ok(PurgeOutcome {
                deleted: 0,
                failed: 0,
            });
        }

        let entries = fs::read_dir(&self.dir).map_err(|source| HistoryError::List {
            path: self.dir.clone(),
            source,
        })?;

        let mut outcome = PurgeOutcome {
            deleted: 0,
            failed: 0,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => outcome.deleted += 1,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to delete record: {e}");
                    outcome.failed += 1;
                }
            }
        }
        Ok(outcome)
    }

    fn resolve(&self, name: &Path) -> PathBuf {
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.dir.join(name)
        }
    }
}

fn read_record(path: &Path) -> Result<AttemptRecord, io::Error> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(io::Error::other)
}

/// Make a title safe to embed in a file name. The stored record keeps the
/// original title; only the path is sanitized.
fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect();
    if cleaned.is_empty() {
        "attempt".to_string()
    } else {
        cleaned
    }
}
