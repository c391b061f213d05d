//! Registration Domain
//!
//! This crate models registration for every role on the platform and drives
//! the multi-step sequence that turns a filled-in form into backend records.
//!
//! # Registration Sequence
//!
//! ```text
//! Idle -> CreatingUser -> CreatingProfile -> UploadingDocuments -> Completed
//!              \                 \                    \
//!               +-----------------+--------------------+--> Failed
//! ```
//!
//! Each step needs the id produced by the step before it: the user id feeds
//! profile creation and the profile id feeds the document upload. A failed
//! step stops the sequence without undoing earlier steps, so a failure after
//! user creation leaves that user on the backend.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_registration::{PatientSteps, RegistrationOrchestrator};
//!
//! let steps = PatientSteps::new(patient_port, registration);
//! let mut flow = RegistrationOrchestrator::new(user_port, steps)
//!     .with_progress(|progress: &RegistrationProgress| println!("{}", progress.message));
//!
//! let outcome = flow.run().await?;
//! println!("registered user {} as {}", outcome.user_id, outcome.profile_id);
//! ```

pub mod model;
pub mod ports;
pub mod steps;
pub mod progress;
pub mod orchestrator;
pub mod service;
pub mod error;

pub use model::{
    CreateUserRequest, User, Gender, ProfileId, UploadReceipt,
    PatientDetails, PatientBasicInfo, PatientProfile, PatientDocumentFiles,
    PatientIdentityInsurance, PatientRegistration,
    ValidatorDetails, ValidatorBasicInfo, ValidatorProfile, ValidatorDocumentFiles,
    ValidatorDocuments, ValidatorRegistration,
    IssuerDetails, IssuerBasicInfo, IssuerProfile, IssuerRegistration,
    InsuranceDetails, InsuranceBasicInfo, InsuranceProfile, InsuranceRegistration,
};
pub use ports::{UserPort, PatientPort, ValidatorPort, IssuerPort, InsurancePort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockRegistrationBackend, MockFailure};
pub use steps::{ProfileSteps, PatientSteps, ValidatorSteps, IssuerSteps, InsuranceSteps};
pub use progress::{ProgressSink, RegistrationProgress};
pub use orchestrator::{
    RegistrationOrchestrator, RegistrationState, RegistrationStep, RegistrationOutcome,
    COMPLETION_MESSAGE,
};
pub use service::RegistrationService;
pub use error::RegistrationError;
