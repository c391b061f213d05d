//! Registration Domain Ports
//!
//! One trait per backend resource touched during registration. The HTTP
//! adapter in `infra_http` implements all of them against the REST API; the
//! mock below implements them in memory for tests.
//!
//! Every method is exactly one request: no retries, no timeout. Sequencing and
//! failure handling across requests belong to the orchestrator.

use async_trait::async_trait;

use core_kernel::{DomainPort, RequestError};

use crate::model::{
    CreateUserRequest, User, UploadReceipt,
    PatientBasicInfo, PatientProfile, PatientIdentityInsurance,
    ValidatorBasicInfo, ValidatorProfile, ValidatorDocuments,
    IssuerBasicInfo, IssuerProfile,
    InsuranceBasicInfo, InsuranceProfile,
};

/// User account creation
#[async_trait]
pub trait UserPort: DomainPort {
    /// `POST /users`
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, RequestError>;
}

/// Patient profile and document endpoints
#[async_trait]
pub trait PatientPort: DomainPort {
    /// `POST /patient/basic-info`
    async fn create_patient_basic_info(
        &self,
        request: &PatientBasicInfo,
    ) -> Result<PatientProfile, RequestError>;

    /// `POST /patient/identity-insurance` (multipart)
    async fn upload_identity_insurance(
        &self,
        request: &PatientIdentityInsurance,
    ) -> Result<UploadReceipt, RequestError>;
}

/// Validator profile and credential endpoints
#[async_trait]
pub trait ValidatorPort: DomainPort {
    /// `POST /validator/basic-info`
    async fn create_validator_basic_info(
        &self,
        request: &ValidatorBasicInfo,
    ) -> Result<ValidatorProfile, RequestError>;

    /// `POST /validator/documents` (multipart)
    async fn upload_validator_documents(
        &self,
        request: &ValidatorDocuments,
    ) -> Result<UploadReceipt, RequestError>;
}

/// Issuer profile endpoint
#[async_trait]
pub trait IssuerPort: DomainPort {
    /// `POST /issuer/basic-info`
    async fn create_issuer_basic_info(
        &self,
        request: &IssuerBasicInfo,
    ) -> Result<IssuerProfile, RequestError>;
}

/// Insurance company profile endpoint
#[async_trait]
pub trait InsurancePort: DomainPort {
    /// `POST /insurance/basic-info`
    async fn create_insurance_basic_info(
        &self,
        request: &InsuranceBasicInfo,
    ) -> Result<InsuranceProfile, RequestError>;
}

/// Mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{InsuranceId, IssuerId, PatientId, UserId, ValidatorId};

    /// Scripted failure for one mock operation
    #[derive(Debug, Clone)]
    pub enum MockFailure {
        /// Server answers with a non-success status
        Rejected { status: u16, detail: String },
        /// Request never reaches the server
        Transport(String),
    }

    impl MockFailure {
        pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
            MockFailure::Rejected {
                status,
                detail: detail.into(),
            }
        }

        pub fn transport(message: impl Into<String>) -> Self {
            MockFailure::Transport(message.into())
        }

        fn to_error(&self) -> RequestError {
            match self {
                MockFailure::Rejected { status, detail } => RequestError::rejected(*status, detail.clone()),
                MockFailure::Transport(message) => RequestError::transport(message.clone()),
            }
        }
    }

    /// In-memory registration backend
    ///
    /// Hands out sequential user ids starting at the configured value and a
    /// fixed profile id, records every call by operation name, and fails the
    /// operations it was told to fail.
    #[derive(Debug, Clone)]
    pub struct MockRegistrationBackend {
        next_user_id: Arc<AtomicI64>,
        profile_id: i64,
        failures: Arc<HashMap<&'static str, MockFailure>>,
        calls: Arc<RwLock<Vec<&'static str>>>,
        users: Arc<RwLock<Vec<CreateUserRequest>>>,
    }

    impl Default for MockRegistrationBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockRegistrationBackend {
        /// Creates a backend issuing user id 1 and profile id 1
        pub fn new() -> Self {
            Self {
                next_user_id: Arc::new(AtomicI64::new(1)),
                profile_id: 1,
                failures: Arc::new(HashMap::new()),
                calls: Arc::new(RwLock::new(Vec::new())),
                users: Arc::new(RwLock::new(Vec::new())),
            }
        }

        /// Sets the id the next created user receives
        pub fn with_user_id(self, user_id: i64) -> Self {
            self.next_user_id.store(user_id, Ordering::SeqCst);
            self
        }

        /// Sets the id every created profile receives
        pub fn with_profile_id(mut self, profile_id: i64) -> Self {
            self.profile_id = profile_id;
            self
        }

        /// Makes an operation fail, by port method name
        pub fn failing(mut self, operation: &'static str, failure: MockFailure) -> Self {
            Arc::make_mut(&mut self.failures).insert(operation, failure);
            self
        }

        /// Operations invoked so far, in order
        pub async fn calls(&self) -> Vec<&'static str> {
            self.calls.read().await.clone()
        }

        /// Returns true if the operation was invoked at least once
        pub async fn was_called(&self, operation: &str) -> bool {
            self.calls.read().await.iter().any(|call| *call == operation)
        }

        /// User creation requests received so far
        pub async fn created_users(&self) -> Vec<CreateUserRequest> {
            self.users.read().await.clone()
        }

        async fn record(&self, operation: &'static str) -> Result<(), RequestError> {
            self.calls.write().await.push(operation);
            match self.failures.get(operation) {
                Some(failure) => Err(failure.to_error()),
                None => Ok(()),
            }
        }

        fn receipt(message: &str) -> UploadReceipt {
            UploadReceipt {
                message: Some(message.to_string()),
                ..Default::default()
            }
        }
    }

    impl DomainPort for MockRegistrationBackend {}

    #[async_trait]
    impl UserPort for MockRegistrationBackend {
        async fn create_user(&self, request: &CreateUserRequest) -> Result<User, RequestError> {
            self.record("create_user").await?;
            self.users.write().await.push(request.clone());

            let now = chrono::Utc::now();
            Ok(User {
                user_id: UserId::new(self.next_user_id.fetch_add(1, Ordering::SeqCst)),
                wallet_address: request.wallet_address.clone(),
                role: request.role,
                created_at: now,
                updated_at: now,
            })
        }
    }

    #[async_trait]
    impl PatientPort for MockRegistrationBackend {
        async fn create_patient_basic_info(
            &self,
            request: &PatientBasicInfo,
        ) -> Result<PatientProfile, RequestError> {
            self.record("create_patient_basic_info").await?;
            Ok(PatientProfile {
                patient_id: PatientId::new(self.profile_id),
                user_id: request.user_id,
                full_name: Some(request.details.full_name.clone()),
                email: Some(request.details.email.clone()),
            })
        }

        async fn upload_identity_insurance(
            &self,
            _request: &PatientIdentityInsurance,
        ) -> Result<UploadReceipt, RequestError> {
            self.record("upload_identity_insurance").await?;
            Ok(Self::receipt("Identity and insurance documents uploaded"))
        }
    }

    #[async_trait]
    impl ValidatorPort for MockRegistrationBackend {
        async fn create_validator_basic_info(
            &self,
            request: &ValidatorBasicInfo,
        ) -> Result<ValidatorProfile, RequestError> {
            self.record("create_validator_basic_info").await?;
            Ok(ValidatorProfile {
                validator_id: ValidatorId::new(self.profile_id),
                user_id: request.user_id,
                full_name: Some(request.details.full_name.clone()),
                license_number: Some(request.details.license_number.clone()),
            })
        }

        async fn upload_validator_documents(
            &self,
            _request: &ValidatorDocuments,
        ) -> Result<UploadReceipt, RequestError> {
            self.record("upload_validator_documents").await?;
            Ok(Self::receipt("Validator documents uploaded"))
        }
    }

    #[async_trait]
    impl IssuerPort for MockRegistrationBackend {
        async fn create_issuer_basic_info(
            &self,
            request: &IssuerBasicInfo,
        ) -> Result<IssuerProfile, RequestError> {
            self.record("create_issuer_basic_info").await?;
            Ok(IssuerProfile {
                issuer_id: IssuerId::new(self.profile_id),
                user_id: request.user_id,
                organization_name: Some(request.details.organization_name.clone()),
            })
        }
    }

    #[async_trait]
    impl InsurancePort for MockRegistrationBackend {
        async fn create_insurance_basic_info(
            &self,
            request: &InsuranceBasicInfo,
        ) -> Result<InsuranceProfile, RequestError> {
            self.record("create_insurance_basic_info").await?;
            Ok(InsuranceProfile {
                insurance_id: InsuranceId::new(self.profile_id),
                user_id: request.user_id,
                company_name: Some(request.details.company_name.clone()),
            })
        }
    }
}
