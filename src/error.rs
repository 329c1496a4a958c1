//! Error types

use std::path::PathBuf;

use crate::board::Player;

/// Reasons a move cannot be applied.
///
/// The turn controller never surfaces these as failures: a rejected move is a
/// no-op reported as [`crate::Outcome::Rejected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("move {0} is out of range")]
    OutOfRange(usize),

    #[error("game is already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    OutOfTurn(Player),
}

impl MoveError {
    /// Target cell or column cannot take a mark
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            MoveError::Occupied(_) | MoveError::ColumnFull(_) | MoveError::OutOfRange(_)
        )
    }

    /// Requested while the game is not in a state that accepts it
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, MoveError::GameOver | MoveError::OutOfTurn(_))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
