//! High-score persistence.
//!
//! The best score is kept in a small JSON file (`{"high_score": 1200}`).
//! A missing file means no score has been recorded yet.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, or 0 when the file does not exist.
    pub fn load(&self) -> Result<u32> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };
        let file: HighScoreFile = serde_json::from_str(&raw)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(file.high_score)
    }

    /// Overwrite the stored value.
    pub fn save(&self, high_score: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(&HighScoreFile { high_score })?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    /// Store `score` if it beats the current record. Returns whether it did.
    ///
    /// An unreadable file counts as no record and is overwritten.
    pub fn record(&self, score: u32) -> Result<bool> {
        let best = self.load().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable high score file");
            0
        });
        if score <= best {
            return Ok(false);
        }
        self.save(score)?;
        info!(score, previous = best, "new high score");
        Ok(true)
    }
}
