//! Host configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_FPS, FAST_TICK_MS};

pub const DEFAULT_HIGH_SCORE_PATH: &str = "high_score.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity ticks per second.
    pub fps: u32,
    /// Tick period while soft drop is held.
    pub fast_ms: u32,
    pub seed: u32,
    pub high_score_path: PathBuf,
    /// Log file; no logging when unset.
    pub log_path: Option<PathBuf>,
    pub log_level: String,
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let fps = var("TETRIS_FPS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_FPS)
            .max(1);

        let fast_ms = var("TETRIS_FAST_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(FAST_TICK_MS)
            .max(1);

        let seed = var("TETRIS_SEED")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or_else(time_seed);

        let high_score_path = var("TETRIS_HIGH_SCORE_PATH")
            .unwrap_or_else(|| DEFAULT_HIGH_SCORE_PATH.to_string())
            .into();

        let log_path = var("TETRIS_LOG_PATH").map(PathBuf::from);

        let log_level = var("TETRIS_LOG")
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            fps,
            fast_ms,
            seed,
            high_score_path,
            log_path,
            log_level,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = config(&[("TETRIS_SEED", "7")]);
        assert_eq!(c.fps, 3);
        assert_eq!(c.fast_ms, 50);
        assert_eq!(c.seed, 7);
        assert_eq!(c.high_score_path, PathBuf::from("high_score.json"));
        assert_eq!(c.log_path, None);
        assert_eq!(c.log_level, "info");
    }

    #[test]
    fn parses_values() {
        let c = config(&[
            ("TETRIS_FPS", "5"),
            ("TETRIS_FAST_MS", " 30 "),
            ("TETRIS_SEED", "42"),
            ("TETRIS_HIGH_SCORE_PATH", "/tmp/best.json"),
            ("TETRIS_LOG_PATH", "tetris.log"),
            ("TETRIS_LOG", "DEBUG"),
        ]);
        assert_eq!(c.fps, 5);
        assert_eq!(c.fast_ms, 30);
        assert_eq!(c.seed, 42);
        assert_eq!(c.high_score_path, PathBuf::from("/tmp/best.json"));
        assert_eq!(c.log_path, Some(PathBuf::from("tetris.log")));
        assert_eq!(c.log_level, "debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let c = config(&[
            ("TETRIS_FPS", "0"),
            ("TETRIS_FAST_MS", "fast"),
            ("TETRIS_SEED", "3"),
            ("TETRIS_LOG_PATH", "   "),
        ]);
        assert_eq!(c.fps, 1);
        assert_eq!(c.fast_ms, 50);
        assert_eq!(c.log_path, None);
    }

    #[test]
    fn from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
