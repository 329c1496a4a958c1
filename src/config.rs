//! Application configuration loaded from TOML

use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;

/// Longest presentation delay accepted before the computer replies
const MAX_DELAY_MS: u64 = 10_000;

/// Which game to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    #[default]
    Tictactoe,
    ConnectFour,
}

/// Tic-tac-toe settings
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Pause before the computer replies, in milliseconds
    pub ai_delay_ms: u64,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self { ai_delay_ms: 500 }
    }
}

/// Connect-four settings
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConnectFourConfig {
    /// Pause before the computer replies, in milliseconds
    pub ai_delay_ms: u64,
    /// Search depth in plies
    pub max_depth: u8,
}

impl Default for ConnectFourConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 300,
            max_depth: 5,
        }
    }
}

/// Front-end settings
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub start_game: GameKind,
    pub show_debug: bool,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tictactoe: TicTacToeConfig,
    pub connect_four: ConnectFourConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
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

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_four.max_depth == 0 {
            return Err(ConfigError::Validation(
                "connect_four.max_depth must be > 0".into(),
            ));
        }
        if self.tictactoe.ai_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "tictactoe.ai_delay_ms must be <= {MAX_DELAY_MS}"
            )));
        }
        if self.connect_four.ai_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "connect_four.ai_delay_ms must be <= {MAX_DELAY_MS}"
            )));
        }
        Ok(())
    }
}

impl TicTacToeConfig {
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

impl ConnectFourConfig {
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}
