//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LIFE_GRID_WIDTH` | 50 | Initial grid width in cells |
//! | `LIFE_GRID_HEIGHT` | 50 | Initial grid height in cells |
//! | `LIFE_INTERVAL_MS` | 100 | Delay between generations while running |
//! | `LIFE_SEED` | clock-derived | Seed for the randomize action |
//! | `LIFE_STATE_PATH` | `life_state.json` | Save/load file |
//! | `LIFE_LOG_PATH` | unset | Log file; logging is off when unset |
//! | `LIFE_LOG` | `info` | `tracing` filter directive |
//!
//! Values that fail to parse or fall outside the accepted range are replaced by
//! the default.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::DEFAULT_STATE_FILE;
use crate::types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_INTERVAL_MS, MAX_GRID_DIM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub interval_ms: u64,
    pub seed: u32,
    pub state_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            interval_ms: DEFAULT_INTERVAL_MS,
            seed: 1,
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl LifeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let trimmed = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let dim = |key: &str, default: usize| {
            trimmed(key)
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|&v| v > 0 && v <= MAX_GRID_DIM)
                .unwrap_or(default)
        };

        let interval_ms = trimmed("LIFE_INTERVAL_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(defaults.interval_ms);

        let seed = trimmed("LIFE_SEED")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or_else(clock_seed);

        Self {
            grid_width: dim("LIFE_GRID_WIDTH", defaults.grid_width),
            grid_height: dim("LIFE_GRID_HEIGHT", defaults.grid_height),
            interval_ms,
            seed,
            state_path: trimmed("LIFE_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_path),
            log_path: trimmed("LIFE_LOG_PATH").map(PathBuf::from),
            log_filter: trimmed("LIFE_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
