//! Crate-level error type.

use thiserror::Error;

use crate::models::RunState;
use crate::validation::ValidationError;

/// Errors surfaced by driver operations, rendering and configuration I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// Run parameters failed validation; the run did not start.
    #[error("invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// A run is already running or paused.
    #[error("a simulation is already active")]
    RunActive,

    /// The requested transition is not valid from the current state.
    #[error("cannot {action} while {from}")]
    InvalidTransition { from: RunState, action: &'static str },

    #[error("render failed: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}
