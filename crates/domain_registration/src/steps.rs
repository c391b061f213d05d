//! Per-role registration plans
//!
//! The orchestrator owns the sequence; a `ProfileSteps` implementation owns
//! what each role sends at the profile and document steps.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use core_kernel::{InsuranceId, IssuerId, PatientId, RequestError, Role, UserId, ValidatorId};
use domain_validation::{Validate, ValidationResult};

use crate::model::{
    InsuranceRegistration, IssuerRegistration, PatientRegistration, ProfileId, UploadReceipt,
    ValidatorRegistration,
};
use crate::ports::{InsurancePort, IssuerPort, PatientPort, ValidatorPort};

/// Role-specific part of a registration
#[async_trait]
pub trait ProfileSteps: Send + Sync {
    /// Id type of the profile this role creates
    type ProfileId: Copy + Into<ProfileId> + fmt::Debug + Send + Sync;

    fn role(&self) -> Role;

    /// Wallet address the user record is created with
    fn wallet_address(&self) -> &str;

    /// Validates the whole form before anything is sent
    fn validate(&self) -> ValidationResult;

    /// Creates the profile record for an existing user
    async fn create_profile(&self, user_id: UserId) -> Result<Self::ProfileId, RequestError>;

    /// Whether the form carries documents to upload
    fn has_documents(&self) -> bool {
        false
    }

    /// Uploads the documents against the created profile
    ///
    /// Only called when [`has_documents`](Self::has_documents) is true.
    async fn upload_documents(
        &self,
        _profile_id: Self::ProfileId,
    ) -> Result<UploadReceipt, RequestError> {
        Ok(UploadReceipt::default())
    }
}

/// Patient: basic info, then identity and insurance documents
pub struct PatientSteps {
    port: Arc<dyn PatientPort>,
    registration: PatientRegistration,
}

impl PatientSteps {
    pub fn new(port: Arc<dyn PatientPort>, registration: PatientRegistration) -> Self {
        Self { port, registration }
    }
}

#[async_trait]
impl ProfileSteps for PatientSteps {
    type ProfileId = PatientId;

    fn role(&self) -> Role {
        Role::Patient
    }

    fn wallet_address(&self) -> &str {
        &self.registration.wallet_address
    }

    fn validate(&self) -> ValidationResult {
        self.registration.validate()
    }

    async fn create_profile(&self, user_id: UserId) -> Result<PatientId, RequestError> {
        let request = self.registration.basic_info(user_id);
        let profile = self.port.create_patient_basic_info(&request).await?;
        Ok(profile.patient_id)
    }

    fn has_documents(&self) -> bool {
        self.registration.documents.is_some()
    }

    async fn upload_documents(&self, patient_id: PatientId) -> Result<UploadReceipt, RequestError> {
        match self.registration.identity_insurance(patient_id) {
            Some(request) => self.port.upload_identity_insurance(&request).await,
            None => Ok(UploadReceipt::default()),
        }
    }
}

/// Validator: basic info, then license and ID documents
pub struct ValidatorSteps {
    port: Arc<dyn ValidatorPort>,
    registration: ValidatorRegistration,
}

impl ValidatorSteps {
    pub fn new(port: Arc<dyn ValidatorPort>, registration: ValidatorRegistration) -> Self {
        Self { port, registration }
    }
}

#[async_trait]
impl ProfileSteps for ValidatorSteps {
    type ProfileId = ValidatorId;

    fn role(&self) -> Role {
        Role::Validator
    }

    fn wallet_address(&self) -> &str {
        &self.registration.wallet_address
    }

    fn validate(&self) -> ValidationResult {
        self.registration.validate()
    }

    async fn create_profile(&self, user_id: UserId) -> Result<ValidatorId, RequestError> {
        let request = self.registration.basic_info(user_id);
        let profile = self.port.create_validator_basic_info(&request).await?;
        Ok(profile.validator_id)
    }

    fn has_documents(&self) -> bool {
        self.registration.documents.is_some()
    }

    async fn upload_documents(&self, validator_id: ValidatorId) -> Result<UploadReceipt, RequestError> {
        match self.registration.documents_request(validator_id) {
            Some(request) => self.port.upload_validator_documents(&request).await,
            None => Ok(UploadReceipt::default()),
        }
    }
}

/// Issuer: basic info only
pub struct IssuerSteps {
    port: Arc<dyn IssuerPort>,
    registration: IssuerRegistration,
}

impl IssuerSteps {
    pub fn new(port: Arc<dyn IssuerPort>, registration: IssuerRegistration) -> Self {
        Self { port, registration }
    }
}

#[async_trait]
impl ProfileSteps for IssuerSteps {
    type ProfileId = IssuerId;

    fn role(&self) -> Role {
        Role::Issuer
    }

    fn wallet_address(&self) -> &str {
        &self.registration.wallet_address
    }

    fn validate(&self) -> ValidationResult {
        self.registration.validate()
    }

    async fn create_profile(&self, user_id: UserId) -> Result<IssuerId, RequestError> {
        let request = self.registration.basic_info(user_id);
        let profile = self.port.create_issuer_basic_info(&request).await?;
        Ok(profile.issuer_id)
    }
}

/// Insurance company: basic info only
pub struct InsuranceSteps {
    port: Arc<dyn InsurancePort>,
    registration: InsuranceRegistration,
}

impl InsuranceSteps {
    pub fn new(port: Arc<dyn InsurancePort>, registration: InsuranceRegistration) -> Self {
        Self { port, registration }
    }
}

#[async_trait]
impl ProfileSteps for InsuranceSteps {
    type ProfileId = InsuranceId;

    fn role(&self) -> Role {
        Role::Insurance
    }

    fn wallet_address(&self) -> &str {
        &self.registration.wallet_address
    }

    fn validate(&self) -> ValidationResult {
        self.registration.validate()
    }

    async fn create_profile(&self, user_id: UserId) -> Result<InsuranceId, RequestError> {
        let request = self.registration.basic_info(user_id);
        let profile = self.port.create_insurance_basic_info(&request).await?;
        Ok(profile.insurance_id)
    }
}
