use std::{fs, path::Path};

use anyhow::Context;
use liblife::config::GameConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,

    /// Print live cells in green.
    pub color: bool,

    /// Seed for the initial board, the current time is used when left out.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            color: true,
            seed: None,
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let config_serialized =
            fs::read(path).with_context(|| format!("Couldn't read config {}", path.display()))?;

        Self::parse(&config_serialized)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(config_serialized: &[u8]) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_slice(config_serialized).context("Couldn't deserialize config")?;

        config.game.validate()?;
        Ok(config)
    }

    pub fn seed_or_now(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64)
    }
}
