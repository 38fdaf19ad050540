//! Engine configuration, read from the environment.

use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::warn;

use crate::core::GameConfig;
use crate::types::{GRAVITY_MS, TICK_MS, WIN_DELAY_MS, WIN_LINES};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Gravity period in milliseconds
    pub gravity_ms: u32,
    /// Ticker period in milliseconds; each tick advances the session by this much
    pub tick_ms: u32,
    /// Grace period between winning and the completion callback
    pub win_delay_ms: u32,
    /// Piece RNG seed
    pub seed: u32,
    /// Depth of the input queue in front of the session
    pub max_pending_commands: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_MS,
            tick_ms: TICK_MS,
            win_delay_ms: WIN_DELAY_MS,
            seed: 1,
            max_pending_commands: 32,
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// - `TRANSFORM_TETRIS_GRAVITY_MS` (default 700)
    /// - `TRANSFORM_TETRIS_TICK_MS` (default 16)
    /// - `TRANSFORM_TETRIS_WIN_DELAY_MS` (default 1500)
    /// - `TRANSFORM_TETRIS_SEED` (default: derived from the clock)
    /// - `TRANSFORM_TETRIS_MAX_PENDING` (default 32)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            gravity_ms: env_parse("TRANSFORM_TETRIS_GRAVITY_MS")
                .unwrap_or(defaults.gravity_ms)
                .max(1),
            tick_ms: env_parse("TRANSFORM_TETRIS_TICK_MS")
                .unwrap_or(defaults.tick_ms)
                .max(1),
            win_delay_ms: env_parse("TRANSFORM_TETRIS_WIN_DELAY_MS")
                .unwrap_or(defaults.win_delay_ms),
            seed: env_parse("TRANSFORM_TETRIS_SEED").unwrap_or_else(clock_seed),
            max_pending_commands: env_parse("TRANSFORM_TETRIS_MAX_PENDING")
                .unwrap_or(defaults.max_pending_commands)
                .max(1),
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            gravity_ms: self.gravity_ms.max(1),
            win_delay_ms: self.win_delay_ms,
            win_lines: WIN_LINES,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1) as u64)
    }
}
