use std::path::PathBuf;

/// Errors returned by [`GameBoard`](crate::game::GameBoard) operations.
///
/// A drop into a full column is not in here: it is a normal
/// [`DropOutcome::Rejected`](crate::game::DropOutcome::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("cell ({column}, {row}) is out of range for a {width}x{height} board")]
    CellOutOfRange {
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    #[error("game is over; reset to play again")]
    GameOver,

    #[error("invalid board size {width}x{height}: need at least 1x1 and a cell count that fits in memory")]
    InvalidDimensions { width: usize, height: usize },

    #[error("victory condition must be at least 2 (got {0})")]
    InvalidVictoryCondition(usize),
}

/// Errors that stop a replay of column choices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("move {number}: columns are numbered from 1")]
    ZeroColumn { number: usize },

    #[error("move {number} (column {column}): {source}")]
    Move {
        number: usize,
        column: usize,
        source: GameError,
    },
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

impl From<GameError> for ConfigError {
    fn from(err: GameError) -> Self {
        ConfigError::Validation(err.to_string())
    }
}
