//! Registration orchestrator
//!
//! Drives one registration attempt through its dependent network calls as an
//! explicit state machine. Each call to [`RegistrationOrchestrator::advance`]
//! performs exactly one transition, so a caller can render every intermediate
//! state; [`RegistrationOrchestrator::run`] drives the machine to the end.
//!
//! # Guarantees
//!
//! - A step runs only after the previous step's id is available. The profile
//!   step cannot be reached without a user id, nor the upload step without a
//!   profile id.
//! - The first failure ends the attempt. Later steps never run and earlier
//!   steps are not undone: a failure after step 1 leaves the created user on
//!   the backend, and the error reports its id.
//! - Nothing is retried. Retrying means [`restart`](RegistrationOrchestrator::restart)
//!   and running again, which creates another user.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use core_kernel::{RequestError, Role, UserId};

use crate::error::RegistrationError;
use crate::model::{CreateUserRequest, ProfileId, UploadReceipt};
use crate::ports::UserPort;
use crate::progress::{ProgressSink, RegistrationProgress};
use crate::steps::ProfileSteps;

/// Message attached to a completed registration
pub const COMPLETION_MESSAGE: &str = "Registration completed successfully";

/// A network step of the registration sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    CreateUser,
    CreateProfile,
    UploadDocuments,
}

impl RegistrationStep {
    /// 1-based position in the sequence
    pub fn number(&self) -> usize {
        match self {
            RegistrationStep::CreateUser => 1,
            RegistrationStep::CreateProfile => 2,
            RegistrationStep::UploadDocuments => 3,
        }
    }

    /// Progress text shown while the step runs
    pub fn description(&self, role: Role) -> String {
        match self {
            RegistrationStep::CreateUser => "Creating user account...".to_string(),
            RegistrationStep::CreateProfile => format!("Saving {} information...", role),
            RegistrationStep::UploadDocuments => "Uploading documents...".to_string(),
        }
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistrationStep::CreateUser => "User creation",
            RegistrationStep::CreateProfile => "Profile creation",
            RegistrationStep::UploadDocuments => "Document upload",
        })
    }
}

/// Aggregate result of a completed registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationOutcome {
    pub role: Role,
    pub user_id: UserId,
    pub profile_id: ProfileId,
    /// Upload acknowledgement, when documents were sent
    pub documents: Option<UploadReceipt>,
    pub message: String,
}

/// State of one registration attempt
///
/// `P` is the role's profile id type.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationState<P> {
    /// Nothing sent yet
    Idle,
    /// Next step creates the user
    CreatingUser,
    /// Next step creates the profile for `user_id`
    CreatingProfile { user_id: UserId },
    /// Next step uploads documents for `profile_id`
    UploadingDocuments { user_id: UserId, profile_id: P },
    Completed(RegistrationOutcome),
    Failed {
        step: RegistrationStep,
        user_id: Option<UserId>,
        profile_id: Option<P>,
    },
}

impl<P> RegistrationState<P> {
    /// Returns true for `Completed` and `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, RegistrationState::Completed(_) | RegistrationState::Failed { .. })
    }

    /// Step the state is waiting to run, if any
    pub fn pending_step(&self) -> Option<RegistrationStep> {
        match self {
            RegistrationState::CreatingUser => Some(RegistrationStep::CreateUser),
            RegistrationState::CreatingProfile { .. } => Some(RegistrationStep::CreateProfile),
            RegistrationState::UploadingDocuments { .. } => Some(RegistrationStep::UploadDocuments),
            _ => None,
        }
    }
}

// What `advance` has to do next, copied out of the state so the state can be
// replaced while the step runs.
enum Pending<P> {
    Validate,
    CreateUser,
    CreateProfile(UserId),
    UploadDocuments(UserId, P),
    Finished,
}

/// Sequences the calls of one registration
pub struct RegistrationOrchestrator<S: ProfileSteps> {
    users: Arc<dyn UserPort>,
    steps: S,
    state: RegistrationState<S::ProfileId>,
    progress: Option<Box<dyn ProgressSink>>,
}

impl<S: ProfileSteps> RegistrationOrchestrator<S> {
    /// Creates an idle orchestrator
    ///
    /// # Arguments
    ///
    /// * `users` - Port creating the user record (step 1)
    /// * `steps` - Role plan creating the profile and uploading documents
    pub fn new(users: Arc<dyn UserPort>, steps: S) -> Self {
        Self {
            users,
            steps,
            state: RegistrationState::Idle,
            progress: None,
        }
    }

    /// Attaches a progress sink
    pub fn with_progress(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    pub fn state(&self) -> &RegistrationState<S::ProfileId> {
        &self.state
    }

    pub fn role(&self) -> Role {
        self.steps.role()
    }

    /// Number of network steps this registration runs
    pub fn total_steps(&self) -> usize {
        if self.steps.has_documents() { 3 } else { 2 }
    }

    /// Performs one transition
    ///
    /// From `Idle` this validates the form and moves to `CreatingUser`
    /// without touching the network; an invalid form leaves the machine in
    /// `Idle`. From every other non-terminal state it runs that state's step.
    ///
    /// # Errors
    ///
    /// * `InvalidForm` - validation failed, nothing was sent
    /// * `StepFailed` - the step's request failed; the machine is now `Failed`
    /// * `AlreadyFinished` - the machine is already terminal
    pub async fn advance(&mut self) -> Result<&RegistrationState<S::ProfileId>, RegistrationError> {
        let pending = match &self.state {
            RegistrationState::Idle => Pending::Validate,
            RegistrationState::CreatingUser => Pending::CreateUser,
            RegistrationState::CreatingProfile { user_id } => Pending::CreateProfile(*user_id),
            RegistrationState::UploadingDocuments { user_id, profile_id } => {
                Pending::UploadDocuments(*user_id, *profile_id)
            }
            RegistrationState::Completed(_) | RegistrationState::Failed { .. } => Pending::Finished,
        };

        match pending {
            Pending::Validate => {
                let validation = self.steps.validate();
                if !validation.is_valid {
                    warn!(
                        role = %self.steps.role(),
                        fields = validation.errors.len(),
                        "Registration form rejected by validation"
                    );
                    return Err(RegistrationError::InvalidForm(validation));
                }
                self.enter(RegistrationState::CreatingUser);
            }
            Pending::CreateUser => {
                let request = CreateUserRequest {
                    wallet_address: self.steps.wallet_address().to_string(),
                    role: self.steps.role(),
                };
                match self.users.create_user(&request).await {
                    Ok(user) => {
                        info!(user_id = %user.user_id, role = %user.role, "User created");
                        self.enter(RegistrationState::CreatingProfile { user_id: user.user_id });
                    }
                    Err(source) => {
                        return Err(self.fail(RegistrationStep::CreateUser, None, None, source));
                    }
                }
            }
            Pending::CreateProfile(user_id) => match self.steps.create_profile(user_id).await {
                Ok(profile_id) => {
                    let profile: ProfileId = profile_id.into();
                    info!(%user_id, profile_id = %profile, "Profile created");
                    if self.steps.has_documents() {
                        self.enter(RegistrationState::UploadingDocuments { user_id, profile_id });
                    } else {
                        self.complete(user_id, profile_id, None);
                    }
                }
                Err(source) => {
                    return Err(self.fail(RegistrationStep::CreateProfile, Some(user_id), None, source));
                }
            },
            Pending::UploadDocuments(user_id, profile_id) => {
                match self.steps.upload_documents(profile_id).await {
                    Ok(receipt) => {
                        let profile: ProfileId = profile_id.into();
                        info!(%user_id, profile_id = %profile, "Documents uploaded");
                        self.complete(user_id, profile_id, Some(receipt));
                    }
                    Err(source) => {
                        return Err(self.fail(
                            RegistrationStep::UploadDocuments,
                            Some(user_id),
                            Some(profile_id),
                            source,
                        ));
                    }
                }
            }
            Pending::Finished => return Err(RegistrationError::AlreadyFinished),
        }

        Ok(&self.state)
    }

    /// Advances until the registration completes or fails
    pub async fn run(&mut self) -> Result<RegistrationOutcome, RegistrationError> {
        loop {
            if let RegistrationState::Completed(outcome) = self.advance().await? {
                return Ok(outcome.clone());
            }
        }
    }

    /// Returns a finished machine to `Idle` for a manual retry of the whole
    /// sequence
    ///
    /// A machine that is still mid-sequence is left untouched and `false` is
    /// returned. Running again creates a new user; users left by earlier
    /// attempts are not reused or cleaned up.
    pub fn restart(&mut self) -> bool {
        if !self.state.is_terminal() {
            return false;
        }
        self.state = RegistrationState::Idle;
        true
    }

    fn enter(&mut self, state: RegistrationState<S::ProfileId>) {
        if let Some(step) = state.pending_step() {
            self.report(Some(step), step.description(self.steps.role()), step.number());
        }
        self.state = state;
    }

    fn complete(&mut self, user_id: UserId, profile_id: S::ProfileId, documents: Option<UploadReceipt>) {
        let outcome = RegistrationOutcome {
            role: self.steps.role(),
            user_id,
            profile_id: profile_id.into(),
            documents,
            message: COMPLETION_MESSAGE.to_string(),
        };
        info!(%user_id, profile_id = %outcome.profile_id, "Registration completed");

        self.report(None, COMPLETION_MESSAGE.to_string(), self.total_steps());
        self.state = RegistrationState::Completed(outcome);
    }

    fn fail(
        &mut self,
        step: RegistrationStep,
        user_id: Option<UserId>,
        profile_id: Option<S::ProfileId>,
        source: RequestError,
    ) -> RegistrationError {
        warn!(
            step = %step,
            user_id = ?user_id.map(|id| id.value()),
            error = %source,
            "Registration step failed"
        );

        self.state = RegistrationState::Failed { step, user_id, profile_id };
        RegistrationError::StepFailed {
            step,
            user_id,
            profile_id: profile_id.map(Into::into),
            source,
        }
    }

    fn report(&self, step: Option<RegistrationStep>, message: String, step_number: usize) {
        if let Some(sink) = &self.progress {
            sink.report(&RegistrationProgress {
                step,
                message,
                step_number,
                total_steps: self.total_steps(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use core_kernel::IssuerId;
    use crate::model::{IssuerDetails, IssuerRegistration};
    use crate::ports::mock::{MockFailure, MockRegistrationBackend};
    use crate::steps::IssuerSteps;

    const WALLET: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    fn issuer_registration(wallet: &str) -> IssuerRegistration {
        IssuerRegistration {
            wallet_address: wallet.to_string(),
            details: IssuerDetails {
                organization_name: "Metro Diagnostics".to_string(),
                registration_number: "LAB-2024-001".to_string(),
                email: "labs@metro.example".to_string(),
                phone: "9123456780".to_string(),
                address: None,
            },
        }
    }

    fn orchestrator(
        backend: &MockRegistrationBackend,
        wallet: &str,
    ) -> RegistrationOrchestrator<IssuerSteps> {
        let steps = IssuerSteps::new(Arc::new(backend.clone()), issuer_registration(wallet));
        RegistrationOrchestrator::new(Arc::new(backend.clone()), steps)
    }

    #[tokio::test]
    async fn test_advance_walks_each_state() {
        let backend = MockRegistrationBackend::new().with_user_id(4).with_profile_id(8);
        let mut flow = orchestrator(&backend, WALLET);

        assert_eq!(flow.state(), &RegistrationState::Idle);
        assert_eq!(flow.advance().await.unwrap(), &RegistrationState::CreatingUser);
        assert!(backend.calls().await.is_empty());

        assert_eq!(
            flow.advance().await.unwrap(),
            &RegistrationState::CreatingProfile { user_id: UserId::new(4) }
        );

        match flow.advance().await.unwrap() {
            RegistrationState::Completed(outcome) => {
                assert_eq!(outcome.profile_id, ProfileId::Issuer(IssuerId::new(8)));
                assert!(outcome.documents.is_none());
            }
            other => panic!("expected Completed, got {:?}", other),
        }

        assert!(matches!(flow.advance().await, Err(RegistrationError::AlreadyFinished)));
    }

    #[tokio::test]
    async fn test_invalid_form_stays_idle() {
        let backend = MockRegistrationBackend::new();
        let mut flow = orchestrator(&backend, "0x123");

        let error = flow.advance().await.unwrap_err();
        match error {
            RegistrationError::InvalidForm(result) => {
                assert!(result.error_for("wallet_address").is_some());
            }
            other => panic!("expected InvalidForm, got {:?}", other),
        }
        assert_eq!(flow.state(), &RegistrationState::Idle);
        assert!(backend.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_progress_reports_upcoming_steps() {
        let backend = MockRegistrationBackend::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            move |progress: &RegistrationProgress| {
                seen.lock().unwrap().push((progress.step, progress.message.clone()));
            }
        };

        let mut flow = orchestrator(&backend, WALLET).with_progress(sink);
        flow.run().await.unwrap();

        let seen = seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (Some(RegistrationStep::CreateUser), "Creating user account...".to_string()),
                (Some(RegistrationStep::CreateProfile), "Saving issuer information...".to_string()),
                (None, COMPLETION_MESSAGE.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_restart_creates_a_new_user() {
        let backend = MockRegistrationBackend::new()
            .with_user_id(20)
            .failing("create_issuer_basic_info", MockFailure::rejected(500, "Database unavailable"));
        let mut flow = orchestrator(&backend, WALLET);

        let first = flow.run().await.unwrap_err();
        assert_eq!(first.orphaned_user(), Some(UserId::new(20)));

        assert!(flow.restart());
        let second = flow.run().await.unwrap_err();
        assert_eq!(second.orphaned_user(), Some(UserId::new(21)));
        assert_eq!(backend.created_users().await.len(), 2);
    }

    #[tokio::test]
    async fn test_restart_ignores_an_unfinished_machine() {
        let backend = MockRegistrationBackend::new().with_user_id(4).with_profile_id(8);
        let mut flow = orchestrator(&backend, WALLET);

        flow.advance().await.unwrap();
        flow.advance().await.unwrap();
        assert!(!flow.restart());
        assert_eq!(flow.state(), &RegistrationState::CreatingProfile { user_id: UserId::new(4) });

        flow.run().await.unwrap();
        assert!(flow.restart());
        assert_eq!(flow.state(), &RegistrationState::Idle);
        assert_eq!(backend.created_users().await.len(), 1);
    }

    #[test]
    fn test_step_descriptions() {
        assert_eq!(
            RegistrationStep::CreateProfile.description(Role::Patient),
            "Saving patient information..."
        );
        assert_eq!(RegistrationStep::UploadDocuments.number(), 3);
    }
}
