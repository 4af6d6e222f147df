//! Error types for the tictactoe crate

use thiserror::Error;

/// Main error type for the tictactoe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("game is already over")]
    GameOver,

    #[error("position ({row}, {col}) is out of bounds (rows and columns run 0-2)")]
    OutOfBounds { row: i32, col: i32 },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },

    #[error("input exhausted before the game ended")]
    NoInput,

    #[error("failed to read from the input source: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to the output sink: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
