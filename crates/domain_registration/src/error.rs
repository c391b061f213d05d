//! Registration domain errors

use thiserror::Error;

use core_kernel::{RequestError, UserId};
use domain_validation::ValidationResult;

use crate::model::ProfileId;
use crate::orchestrator::RegistrationStep;

/// Message shown when the form has field errors
pub const INVALID_FORM_MESSAGE: &str = "Please correct the highlighted fields";

/// Errors that can end a registration attempt
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The form failed local validation; nothing was sent
    #[error("Registration form is invalid: {}", .0.messages().join("; "))]
    InvalidForm(ValidationResult),

    /// A step failed; earlier steps stay done on the backend
    #[error("Step {} ({step}) failed: {source}", .step.number())]
    StepFailed {
        step: RegistrationStep,
        /// User created before the failure, if step 1 succeeded
        user_id: Option<UserId>,
        /// Profile created before the failure, if step 2 succeeded
        profile_id: Option<ProfileId>,
        #[source]
        source: RequestError,
    },

    /// `advance` was called on a completed or failed registration
    #[error("Registration already finished")]
    AlreadyFinished,
}

impl RegistrationError {
    /// Step that failed, for sequence aborts
    pub fn step(&self) -> Option<RegistrationStep> {
        match self {
            RegistrationError::StepFailed { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// User left behind on the backend by a sequence abort
    pub fn orphaned_user(&self) -> Option<UserId> {
        match self {
            RegistrationError::StepFailed { user_id, .. } => *user_id,
            _ => None,
        }
    }

    /// Underlying request failure, for sequence aborts
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            RegistrationError::StepFailed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Message to show on the form
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::InvalidForm(_) => INVALID_FORM_MESSAGE.to_string(),
            RegistrationError::StepFailed { step, source, .. } => {
                format!("{} failed: {}", step, source.user_message())
            }
            RegistrationError::AlreadyFinished => self.to_string(),
        }
    }
}
