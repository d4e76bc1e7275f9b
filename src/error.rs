//! Error types for the galo crate

use thiserror::Error;

/// Main error type for the galo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed move input '{input}' (expected two numbers, e.g. '2 3')")]
    MalformedInput { input: String },

    #[error("position ({row}, {col}) is out of bounds (rows and columns must be 0-2)")]
    OutOfBounds { row: i64, col: i64 },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("failed to read console input: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Input { source }
    }
}
