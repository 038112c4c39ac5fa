//! Settings for the text game, read from an optional TOML file

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Print the board after every accepted move
    pub show_board: bool,
    /// Print "White's turn" / "Black's turn" before each prompt
    pub announce_turn: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            show_board: true,
            announce_turn: true,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
