use std::path::{Path, PathBuf};

use tracing::warn;

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::ConfigError;
use crate::eval::ScoreWeights;

/// Default per-move time limit for external bots.
pub const DEFAULT_MOVE_TIMEOUT_MS: u64 = 5_000;

/// Match runner configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Number of games to play
    pub rounds: usize,
    /// Base seed for colour assignment and random bots; random when unset
    pub seed: Option<u64>,
    /// Worker threads for running rounds; 1 runs them sequentially
    pub threads: usize,
    /// Time limit for an external bot to answer one move
    pub move_timeout_ms: u64,
    /// Directory for per-game logs; no logs when unset
    pub output_dir: Option<PathBuf>,
    /// Weights of the heuristic bot
    pub weights: ScoreWeights,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            board_size: DEFAULT_BOARD_SIZE,
            rounds: 10,
            seed: None,
            threads: 1,
            move_timeout_ms: DEFAULT_MOVE_TIMEOUT_MS,
            output_dir: None,
            weights: ScoreWeights::default(),
        }
    }
}

impl ArenaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: ArenaConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be in 1..={MAX_BOARD_SIZE}"
            )));
        }
        if self.rounds == 0 {
            return Err(ConfigError::Validation("rounds must be > 0".into()));
        }
        if self.threads == 0 {
            return Err(ConfigError::Validation("threads must be >= 1".into()));
        }
        if self.move_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "move_timeout_ms must be > 0".into(),
            ));
        }
        if !self.weights.in_range() {
            return Err(ConfigError::Validation(format!(
                "weights must be in 0..={}",
                ScoreWeights::MAX
            )));
        }
        Ok(())
    }
}
