//! Error types for the Connect-4 engine

use std::path::PathBuf;

use crate::board::Piece;

/// Errors from the checked move path, [`crate::GameState::try_place_piece`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (0..{max})", max = crate::board::NB_COL)]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from seating players at the start of a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a player's mark must be Red or Yellow, got {0}")]
    InvalidMark(Piece),

    #[error("both players hold the {0} mark")]
    DuplicateMark(Piece),
}

/// Errors raised when asking the engine for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("player '{0}' is human; their column must come from the interface")]
    HumanPlayer(String),

    #[error("the game is already over")]
    GameOver,

    #[error("player '{name}' holds {mark} but {to_move} is to move")]
    NotToMove {
        name: String,
        mark: Piece,
        to_move: Piece,
    },

    #[error("no legal column to play")]
    NoLegalMove,
}

/// Errors that can occur when loading engine configuration.
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
