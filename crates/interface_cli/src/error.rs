//! Command failures reported to the user

use thiserror::Error;

use core_kernel::UserId;
use domain_validation::RuleName;

/// Errors a command ends with, besides request and session failures
#[derive(Debug, Error)]
pub enum CliError {
    /// Registration stopped; `orphaned_user` names a user left on the server
    #[error("{message}")]
    Registration {
        message: String,
        orphaned_user: Option<UserId>,
    },

    /// A value failed the rule it was checked against
    #[error("{value:?} is not a valid {rule}: {message}")]
    InvalidValue {
        rule: RuleName,
        value: String,
        message: &'static str,
    },

    /// A list could not be loaded
    #[error("{list}: {message}")]
    ListFailed {
        list: &'static str,
        message: String,
    },
}
