//! Log setup for the terminal host.
//!
//! The game owns stdout, so log lines go to the file named by
//! `TETRIS_LOG_PATH`. Without it no subscriber is installed and the
//! `tracing` macros in the engine cost next to nothing.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;

use crate::config::{GameConfig, DEFAULT_LOG_LEVEL};

/// Install the global subscriber. Returns whether logging is enabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level(&config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("install log subscriber")?;

    Ok(true)
}

fn level(name: &str) -> LevelFilter {
    name.parse()
        .or_else(|_| DEFAULT_LOG_LEVEL.parse())
        .unwrap_or(LevelFilter::INFO)
}
