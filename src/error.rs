//! Error types for parkinglot
//!
//! Every variant here is fatal to a session. Expected "no result" outcomes
//! (lot full, slot not found) are ordinary results, see [`crate::engine::ResultData`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("invalid {what} \"{value}\", please type in a valid number")]
    InvalidArgument { what: &'static str, value: String },

    #[error("parking lot does not exist yet, invalid command")]
    NotInitialized,

    /// The line grammar accepts any text, so this only carries pest's own
    /// failure path
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Line editor error: {0}")]
    ReadlineError(String),
}

/// Process exit code after a fatal session error
pub const FATAL_EXIT_CODE: u8 = 3;

impl ParkingError {
    pub fn invalid_argument(what: &'static str, value: &str) -> Self {
        ParkingError::InvalidArgument {
            what,
            value: value.to_string(),
        }
    }

    /// Whether the error came from the commands themselves rather than from
    /// reading input or writing output
    pub fn is_session_fatal(&self) -> bool {
        matches!(
            self,
            ParkingError::InvalidArgument { .. }
                | ParkingError::NotInitialized
                | ParkingError::ParseError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;
