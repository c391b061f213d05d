//! Registration domain services
//!
//! Builds the per-role orchestrators from a shared set of ports, so callers
//! wire the backend once and register any role through the same service.

use std::sync::Arc;

use crate::error::RegistrationError;
use crate::model::{
    InsuranceRegistration, IssuerRegistration, PatientRegistration, ValidatorRegistration,
};
use crate::orchestrator::{RegistrationOrchestrator, RegistrationOutcome};
use crate::ports::{InsurancePort, IssuerPort, PatientPort, UserPort, ValidatorPort};
use crate::steps::{InsuranceSteps, IssuerSteps, PatientSteps, ValidatorSteps};

/// Service for registering users of every role
#[derive(Clone)]
pub struct RegistrationService {
    users: Arc<dyn UserPort>,
    patients: Arc<dyn PatientPort>,
    validators: Arc<dyn ValidatorPort>,
    issuers: Arc<dyn IssuerPort>,
    insurers: Arc<dyn InsurancePort>,
}

impl RegistrationService {
    /// Creates a service from one backend implementing every registration port
    ///
    /// # Arguments
    ///
    /// * `backend` - HTTP client or mock serving all registration endpoints
    pub fn new<B>(backend: Arc<B>) -> Self
    where
        B: UserPort + PatientPort + ValidatorPort + IssuerPort + InsurancePort,
    {
        Self {
            users: backend.clone(),
            patients: backend.clone(),
            validators: backend.clone(),
            issuers: backend.clone(),
            insurers: backend,
        }
    }

    /// Orchestrator for a patient registration, ready to advance
    pub fn patient_flow(&self, registration: PatientRegistration) -> RegistrationOrchestrator<PatientSteps> {
        let steps = PatientSteps::new(self.patients.clone(), registration);
        RegistrationOrchestrator::new(self.users.clone(), steps)
    }

    /// Orchestrator for a validator registration, ready to advance
    pub fn validator_flow(
        &self,
        registration: ValidatorRegistration,
    ) -> RegistrationOrchestrator<ValidatorSteps> {
        let steps = ValidatorSteps::new(self.validators.clone(), registration);
        RegistrationOrchestrator::new(self.users.clone(), steps)
    }

    pub fn issuer_flow(&self, registration: IssuerRegistration) -> RegistrationOrchestrator<IssuerSteps> {
        let steps = IssuerSteps::new(self.issuers.clone(), registration);
        RegistrationOrchestrator::new(self.users.clone(), steps)
    }

    pub fn insurance_flow(
        &self,
        registration: InsuranceRegistration,
    ) -> RegistrationOrchestrator<InsuranceSteps> {
        let steps = InsuranceSteps::new(self.insurers.clone(), registration);
        RegistrationOrchestrator::new(self.users.clone(), steps)
    }

    /// Registers a patient: user, basic info, then documents when attached
    ///
    /// # Errors
    ///
    /// Returns `InvalidForm` before any request when the form is invalid, or
    /// `StepFailed` naming the first step that failed.
    pub async fn register_patient(
        &self,
        registration: PatientRegistration,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.patient_flow(registration).run().await
    }

    /// Registers a validator: user, basic info, then credentials when attached
    pub async fn register_validator(
        &self,
        registration: ValidatorRegistration,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.validator_flow(registration).run().await
    }

    pub async fn register_issuer(
        &self,
        registration: IssuerRegistration,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.issuer_flow(registration).run().await
    }

    pub async fn register_insurance(
        &self,
        registration: InsuranceRegistration,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.insurance_flow(registration).run().await
    }
}
