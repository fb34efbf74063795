use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::pacing::PacingConfig;
use crate::replay::ReplayConfig;

const CONFIG_PATH: &str = ".drip.toml";

/// Project-level configuration from `.drip.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum characters revealed per scheduler tick.
    #[serde(default = "default_chars_per_tick")]
    pub chars_per_tick: usize,
    /// Scheduler tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Replay chunk size in bytes.
    #[serde(default = "default_chunk_bytes")]
    pub chunk_bytes: usize,
    /// Replay pause between chunks in milliseconds.
    #[serde(default = "default_chunk_delay_ms")]
    pub chunk_delay_ms: u64,
}

fn default_chars_per_tick() -> usize {
    PacingConfig::default().chars_per_tick
}

fn default_tick_ms() -> u64 {
    u64::try_from(PacingConfig::default().tick_interval.as_millis()).unwrap_or(u64::MAX)
}

fn default_chunk_bytes() -> usize {
    ReplayConfig::default().chunk_bytes
}

fn default_chunk_delay_ms() -> u64 {
    u64::try_from(ReplayConfig::default().chunk_delay.as_millis()).unwrap_or(u64::MAX)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chars_per_tick: default_chars_per_tick(),
            tick_ms: default_tick_ms(),
            chunk_bytes: default_chunk_bytes(),
            chunk_delay_ms: default_chunk_delay_ms(),
        }
    }
}

impl Config {
    pub fn pacing(&self) -> PacingConfig {
        PacingConfig {
            chars_per_tick: self.chars_per_tick,
            tick_interval: Duration::from_millis(self.tick_ms),
        }
    }

    pub fn replay(&self) -> ReplayConfig {
        ReplayConfig {
            chunk_bytes: self.chunk_bytes,
            chunk_delay: Duration::from_millis(self.chunk_delay_ms),
        }
    }
}

/// Load configuration from `.drip.toml` under `dir`.
///
/// Falls back to defaults if the file is missing.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_PATH);
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load(dir.path()).unwrap();
        assert_eq!(config.chars_per_tick, default_chars_per_tick());
        assert_eq!(config.tick_ms, default_tick_ms());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_PATH), "chars_per_tick = 9\n").unwrap();
        let config = load(dir.path()).unwrap();
        assert_eq!(config.chars_per_tick, 9);
        assert_eq!(config.chunk_bytes, default_chunk_bytes());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_PATH), "chars_per_tick = \"lots\"\n").unwrap();
        assert!(load(dir.path()).is_err());
    }

    #[test]
    fn durations_convert() {
        let config = Config {
            tick_ms: 25,
            chunk_delay_ms: 5,
            ..Config::default()
        };
        assert_eq!(config.pacing().tick_interval, Duration::from_millis(25));
        assert_eq!(config.replay().chunk_delay, Duration::from_millis(5));
    }
}
