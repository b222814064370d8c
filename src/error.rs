//! Custom error types for budgetdesk
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budgetdesk operations
#[derive(Error, Debug)]
pub enum DeskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The gateway's read response did not have an accepted shape
    #[error("{0}")]
    Validation(String),

    /// Network or server failure; the message is already resolved for display
    #[error("{message}")]
    Transport { message: String },

    /// The create request was rejected
    #[error("{0}")]
    Submission(String),

    /// A create request is already in flight
    #[error("A budget is already being submitted")]
    SubmissionInProgress,

    /// Credential store errors
    #[error("Credential error: {0}")]
    Credentials(String),

    /// Unrecognised user input (field names, sort keys)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DeskError {
    /// Create a transport error carrying a display message
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budgetdesk operations
pub type DeskResult<T> = Result<T, DeskError>;
