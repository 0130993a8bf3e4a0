//! YAML configuration for the CLI and hosts embedding the engine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Game / dice settings.
    #[serde(default)]
    pub game: GameConfig,
    /// Simulation settings (`yatzy sim`).
    #[serde(default)]
    pub sim: SimConfig,
    /// Event log settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Game / dice configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameConfig {
    /// Dice RNG seed. If unset, dice are seeded from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Simulation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimConfig {
    /// Number of games to simulate.
    #[serde(default = "default_sim_games")]
    pub games: u32,
    /// Base RNG seed for simulated games.
    #[serde(default)]
    pub seed: u64,
    /// Print the score histogram after the run.
    #[serde(default = "default_sim_histogram")]
    pub histogram: bool,
}

fn default_sim_games() -> u32 {
    10_000
}

fn default_sim_histogram() -> bool {
    true
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: default_sim_games(),
            seed: 0,
            histogram: default_sim_histogram(),
        }
    }
}

/// Event log configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogConfig {
    /// NDJSON event log path. If unset, event logging is disabled.
    #[serde(default)]
    pub events_path: Option<PathBuf>,
    /// Flush the log every N lines. 0 disables periodic flushing.
    #[serde(default)]
    pub flush_every_lines: u64,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
