//! Validator (medical professional) profiles and credentials

use serde::{Deserialize, Serialize};

use core_kernel::{FileUpload, UserId, ValidatorId};
use domain_validation::{FormValidator, RuleName, Validate, ValidationResult};

/// Professional details entered on the validator form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub license_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Body of `POST /validator/basic-info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorBasicInfo {
    pub user_id: UserId,
    #[serde(flatten)]
    pub details: ValidatorDetails,
}

/// Validator profile returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorProfile {
    pub validator_id: ValidatorId,
    pub user_id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
}

/// Credential files entered on the documents step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorDocumentFiles {
    pub license_document: FileUpload,
    pub id_proof: Option<FileUpload>,
    pub notes: Option<String>,
}

/// Multipart body of `POST /validator/documents`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorDocuments {
    pub validator_id: ValidatorId,
    pub files: ValidatorDocumentFiles,
}

/// Everything the validator registration form collects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRegistration {
    pub wallet_address: String,
    pub details: ValidatorDetails,
    pub documents: Option<ValidatorDocumentFiles>,
}

impl ValidatorRegistration {
    pub fn basic_info(&self, user_id: UserId) -> ValidatorBasicInfo {
        ValidatorBasicInfo {
            user_id,
            details: self.details.clone(),
        }
    }

    pub fn documents_request(&self, validator_id: ValidatorId) -> Option<ValidatorDocuments> {
        self.documents.as_ref().map(|files| ValidatorDocuments {
            validator_id,
            files: files.clone(),
        })
    }
}

impl Validate for ValidatorDetails {
    fn validate(&self) -> ValidationResult {
        FormValidator::new()
            .field("full_name", &self.full_name, RuleName::Name, true)
            .field("email", &self.email, RuleName::Email, true)
            .field("phone", &self.phone, RuleName::Phone, true)
            .required_text("organization", &self.organization)
            .field("license_number", &self.license_number, RuleName::LicenseNumber, true)
            .finish()
    }
}

impl Validate for ValidatorRegistration {
    fn validate(&self) -> ValidationResult {
        let mut form = FormValidator::new()
            .field("wallet_address", &self.wallet_address, RuleName::WalletAddress, true);

        if let Some(files) = &self.documents {
            if files.license_document.is_empty() {
                form = form.error("license_document", "License document is empty");
            }
            if files.id_proof.as_ref().is_some_and(FileUpload::is_empty) {
                form = form.error("id_proof", "ID proof is empty");
            }
        }

        let mut result = form.finish();
        result.merge(self.details.validate());
        result
    }
}
