//! Registration ports over HTTP
//!
//! Structured bodies are posted as JSON; document uploads go through
//! [`IntoMultipart`] and are posted as multipart form data.

use async_trait::async_trait;

use core_kernel::RequestError;
use domain_registration::{
    CreateUserRequest, InsuranceBasicInfo, InsurancePort, InsuranceProfile, IssuerBasicInfo,
    IssuerPort, IssuerProfile, PatientBasicInfo, PatientIdentityInsurance, PatientPort,
    PatientProfile, UploadReceipt, User, UserPort, ValidatorBasicInfo, ValidatorDocuments,
    ValidatorPort, ValidatorProfile,
};

use crate::client::ApiClient;
use crate::endpoints;
use crate::multipart::IntoMultipart;

#[async_trait]
impl UserPort for ApiClient {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, RequestError> {
        self.post_json(endpoints::USERS, request, endpoints::CREATE_USER_FAILED).await
    }
}

#[async_trait]
impl PatientPort for ApiClient {
    async fn create_patient_basic_info(
        &self,
        request: &PatientBasicInfo,
    ) -> Result<PatientProfile, RequestError> {
        self.post_json(
            endpoints::PATIENT_BASIC_INFO,
            request,
            endpoints::PATIENT_BASIC_INFO_FAILED,
        )
        .await
    }

    async fn upload_identity_insurance(
        &self,
        request: &PatientIdentityInsurance,
    ) -> Result<UploadReceipt, RequestError> {
        self.post_multipart(
            endpoints::PATIENT_IDENTITY_INSURANCE,
            request.to_multipart(),
            endpoints::PATIENT_IDENTITY_INSURANCE_FAILED,
        )
        .await
    }
}

#[async_trait]
impl ValidatorPort for ApiClient {
    async fn create_validator_basic_info(
        &self,
        request: &ValidatorBasicInfo,
    ) -> Result<ValidatorProfile, RequestError> {
        self.post_json(
            endpoints::VALIDATOR_BASIC_INFO,
            request,
            endpoints::VALIDATOR_BASIC_INFO_FAILED,
        )
        .await
    }

    async fn upload_validator_documents(
        &self,
        request: &ValidatorDocuments,
    ) -> Result<UploadReceipt, RequestError> {
        self.post_multipart(
            endpoints::VALIDATOR_DOCUMENTS,
            request.to_multipart(),
            endpoints::VALIDATOR_DOCUMENTS_FAILED,
        )
        .await
    }
}

#[async_trait]
impl IssuerPort for ApiClient {
    async fn create_issuer_basic_info(
        &self,
        request: &IssuerBasicInfo,
    ) -> Result<IssuerProfile, RequestError> {
        self.post_json(endpoints::ISSUER_BASIC_INFO, request, endpoints::ISSUER_BASIC_INFO_FAILED)
            .await
    }
}

#[async_trait]
impl InsurancePort for ApiClient {
    async fn create_insurance_basic_info(
        &self,
        request: &InsuranceBasicInfo,
    ) -> Result<InsuranceProfile, RequestError> {
        self.post_json(
            endpoints::INSURANCE_BASIC_INFO,
            request,
            endpoints::INSURANCE_BASIC_INFO_FAILED,
        )
        .await
    }
}
