use std::{error::Error, fmt};

use serde::{Deserialize, Serialize};

use super::neighborhood::Neighborhood;

/// Everything that shapes a game, fixed once the game is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub neighbor_mode: Neighborhood,

    /// Ticks after which an untouched cell is force-flipped, `None` for plain Game of Life.
    pub stability_threshold: Option<usize>,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                columns: self.columns,
            });
        }

        if self.stability_threshold == Some(0) {
            return Err(ConfigError::ZeroStabilityThreshold);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            columns: 60,
            neighbor_mode: Neighborhood::Moore,
            stability_threshold: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard { rows: usize, columns: usize },
    ZeroStabilityThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard { rows, columns } => {
                write!(f, "board must have at least one cell, got {rows}x{columns}")
            }
            ConfigError::ZeroStabilityThreshold => {
                write!(f, "stability threshold must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {}
