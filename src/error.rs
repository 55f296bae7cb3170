use std::path::PathBuf;

/// A disc was dropped somewhere it cannot go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0..7)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// A board handed in from outside does not describe a reachable 6x7 position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 6 rows, found {found}")]
    RowCount { found: usize },

    #[error("row {row} has {found} cells, expected 7")]
    RowWidth { row: usize, found: usize },

    #[error("invalid cell code {code} at row {row}, column {col}")]
    InvalidCode { row: usize, col: usize, code: u8 },

    #[error("invalid cell symbol '{symbol}' at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },

    #[error("disc at row {row}, column {col} is floating above an empty cell")]
    Floating { row: usize, col: usize },
}

/// A game-loop turn could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors returned by the move selectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no legal move available")]
    NoLegalMove,

    #[error("legal mask disagrees with the board at column {column}")]
    MaskMismatch { column: usize },

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that end a game between two agents early.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("{agent} failed to select a move: {source}")]
    Select { agent: String, source: SelectError },

    #[error("{agent} played an illegal move: {source}")]
    Turn { agent: String, source: TurnError },
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
