//! Error types for the tictree crate

use thiserror::Error;

/// Main error type for the tictree crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid depth {depth}: must be between 0 and {max}")]
    InvalidDepth { depth: usize, max: usize },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: O={o_count}, X={x_count} (O moves first, so O must equal X or lead by 1)")]
    InvalidPieceCounts { o_count: usize, x_count: usize },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
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
