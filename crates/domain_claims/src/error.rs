//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Unknown claim status: {0} (expected pending, approved or rejected)")]
    UnknownStatus(String),
}
