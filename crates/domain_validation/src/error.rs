//! Validation domain errors

use thiserror::Error;

/// Errors raised while interpreting validation input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),
}
