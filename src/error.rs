//! Error types for the tiles crate

use thiserror::Error;

/// Main error type for the tiles crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: tile {tile} is not adjacent to the blank")]
    InvalidMove { tile: u8 },

    #[error("board string must have exactly {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error(
        "invalid symbol '{symbol}' at position {position} in '{context}' (expected a digit 0-8)"
    )]
    InvalidCellSymbol {
        symbol: char,
        position: usize,
        context: String,
    },

    #[error("tile {tile} appears more than once in '{context}'")]
    DuplicateTile { tile: u8, context: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("board entry incomplete: only {placed} of 9 cells placed")]
    IncompleteEntry { placed: usize },

    #[error("solution path exhausted after {length} boards")]
    PathExhausted { length: usize },

    #[error("no solution path has been materialized")]
    NoSolutionPath,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
