//! Poll-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by poll and poll store operations.
///
/// Every variant is recoverable: the rejected operation leaves all state
/// untouched, and `message()` is suitable for showing to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// Poll input was rejected.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Option or poll index does not exist.
    #[error("Index {index} is out of range (len {len})")]
    InvalidIndex { index: usize, len: usize },

    /// Poll already received its vote.
    #[error("Poll is closed")]
    AlreadyClosed,

    /// A vote was submitted without choosing an option first.
    #[error("No option selected")]
    NothingSelected,

    /// The option's counter cannot take another vote.
    #[error("Option {index} cannot take more votes")]
    VoteLimitReached { index: usize },
}

impl PollError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PollError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_index(index: usize, len: usize) -> Self {
        PollError::InvalidIndex { index, len }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PollError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PollError::InvalidIndex { .. } => ErrorCode::InvalidIndex,
            PollError::AlreadyClosed => ErrorCode::PollClosed,
            PollError::NothingSelected => ErrorCode::NothingSelected,
            PollError::VoteLimitReached { .. } => ErrorCode::VoteLimitReached,
        }
    }

    /// Rejection message for the person using the board.
    pub fn message(&self) -> String {
        match self {
            PollError::ValidationFailed { message, .. } => message.clone(),
            PollError::InvalidIndex { index, len } => {
                format!("There is no entry #{} (only {} available)", index + 1, len)
            }
            PollError::AlreadyClosed => "This poll is closed".to_string(),
            PollError::NothingSelected => "Select an option first".to_string(),
            PollError::VoteLimitReached { index } => {
                format!("Option #{} cannot take more votes", index + 1)
            }
        }
    }
}

impl From<ValidationError> for PollError {
    fn from(err: ValidationError) -> Self {
        PollError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
