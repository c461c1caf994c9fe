use std::path::PathBuf;

use crate::game::COLS;

/// Errors raised when a move is applied to a column that cannot take it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 1..={max})", max = COLS)]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors raised when building a board from a row diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unexpected character {ch:?} in row {row}")]
    BadCell { row: usize, ch: char },

    #[error("piece floating above an empty cell in column {0}")]
    Floating(usize),
}

/// Errors raised when the search engine is asked for a move it cannot make.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("board is full, no move to search")]
    BoardFull,

    #[error("game is already won, no move to search")]
    GameOver,
}

/// Errors that can occur while running a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("{0} cannot be asked for input in this view")]
    NoInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
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
