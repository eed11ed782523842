//! Error types for move application, notation parsing, state import and configuration.

/// Reasons a move is rejected. The board is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square {0} is off the board")]
    OutOfBounds(usize),

    #[error("({row}, {col}) is off the board")]
    OffBoard { row: usize, col: usize },

    #[error("{from} does not hold a piece of the side to move")]
    NotYourPiece { from: String },

    #[error("{to} is not reachable from {from}")]
    Unreachable { from: String, to: String },
}

/// Malformed move notation. Distinct from [`MoveError`]: the caller should ask for new input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty move")]
    Empty,

    #[error("expected two squares separated by '-': {0:?}")]
    MissingSeparator(String),

    #[error("unknown column {0:?}")]
    UnknownColumn(char),

    #[error("rank is not a number: {0:?}")]
    BadRank(String),

    #[error("rank {0} is off the board")]
    RankOutOfRange(u32),
}

/// Persisted state that cannot be turned back into a board.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("board must have {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} must have {expected} cells, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell value {value} at ({row}, {col})")]
    CellValue { row: usize, col: usize, value: i8 },

    #[error("invalid player value {0}")]
    Player(i8),

    #[error("malformed layout: {0}")]
    Layout(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bad values in the environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
