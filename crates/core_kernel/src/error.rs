//! Core error types used across the workspace

use thiserror::Error;

/// Local failures that never involve the backend
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value could not be parsed into a domain type
    #[error("Validation error: {0}")]
    Validation(String),

    /// A file selected for upload could not be read
    #[error("File error: {0}")]
    File(String),

    /// The session is missing state, or its file cannot be used
    #[error("Session error: {0}")]
    Session(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn file(message: impl Into<String>) -> Self {
        CoreError::File(message.into())
    }

    pub fn session(message: impl Into<String>) -> Self {
        CoreError::Session(message.into())
    }
}
