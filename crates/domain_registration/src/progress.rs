//! Registration progress reporting

use crate::orchestrator::RegistrationStep;

/// Progress notification sent as the registration moves forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationProgress {
    /// Step about to run, or `None` once the registration completed
    pub step: Option<RegistrationStep>,
    /// Human-readable description for the user
    pub message: String,
    /// 1-based position of the step; equals `total_steps` on completion
    pub step_number: usize,
    pub total_steps: usize,
}

impl RegistrationProgress {
    /// Returns true for the completion notification
    pub fn is_complete(&self) -> bool {
        self.step.is_none()
    }
}

/// Receives progress notifications
///
/// Implemented for any `Fn(&RegistrationProgress)` closure, so forms can
/// pass a closure updating their status line.
pub trait ProgressSink: Send + Sync {
    fn report(&self, progress: &RegistrationProgress);
}

impl<F> ProgressSink for F
where
    F: Fn(&RegistrationProgress) + Send + Sync,
{
    fn report(&self, progress: &RegistrationProgress) {
        self(progress)
    }
}
