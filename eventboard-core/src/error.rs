//! Error types for the events board.

use thiserror::Error;

/// Errors that can occur in board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not fetch events: {0}")]
    Fetch(String),

    #[error("Could not decode events: {0}")]
    Decode(String),

    #[error("Could not submit proposal: {0}")]
    Submit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
