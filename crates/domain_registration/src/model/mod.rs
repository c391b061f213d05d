//! Registration data model
//!
//! Request and response shapes for every registration endpoint, plus the
//! per-role registration forms the orchestrator consumes. The backend owns
//! all of these records; this layer only mirrors their shape.

pub mod user;
pub mod patient;
pub mod validator;
pub mod organization;

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{InsuranceId, IssuerId, PatientId, Role, ValidatorId};

pub use user::{CreateUserRequest, User};
pub use patient::{
    Gender, PatientDetails, PatientBasicInfo, PatientProfile, PatientDocumentFiles,
    PatientIdentityInsurance, PatientRegistration,
};
pub use validator::{
    ValidatorDetails, ValidatorBasicInfo, ValidatorProfile, ValidatorDocumentFiles,
    ValidatorDocuments, ValidatorRegistration,
};
pub use organization::{
    IssuerDetails, IssuerBasicInfo, IssuerProfile, IssuerRegistration,
    InsuranceDetails, InsuranceBasicInfo, InsuranceProfile, InsuranceRegistration,
};

/// Id of whichever profile record a registration created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileId {
    Patient(PatientId),
    Validator(ValidatorId),
    Issuer(IssuerId),
    Insurance(InsuranceId),
}

impl ProfileId {
    /// Role the profile belongs to
    pub fn role(&self) -> Role {
        match self {
            ProfileId::Patient(_) => Role::Patient,
            ProfileId::Validator(_) => Role::Validator,
            ProfileId::Issuer(_) => Role::Issuer,
            ProfileId::Insurance(_) => Role::Insurance,
        }
    }

    /// Raw backend key
    pub fn value(&self) -> i64 {
        match self {
            ProfileId::Patient(id) => id.value(),
            ProfileId::Validator(id) => id.value(),
            ProfileId::Issuer(id) => id.value(),
            ProfileId::Insurance(id) => id.value(),
        }
    }

    /// Wire field name of the id
    pub fn label(&self) -> &'static str {
        match self {
            ProfileId::Patient(_) => PatientId::label(),
            ProfileId::Validator(_) => ValidatorId::label(),
            ProfileId::Issuer(_) => IssuerId::label(),
            ProfileId::Insurance(_) => InsuranceId::label(),
        }
    }

    pub fn as_patient(&self) -> Option<PatientId> {
        match self {
            ProfileId::Patient(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_validator(&self) -> Option<ValidatorId> {
        match self {
            ProfileId::Validator(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_issuer(&self) -> Option<IssuerId> {
        match self {
            ProfileId::Issuer(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_insurance(&self) -> Option<InsuranceId> {
        match self {
            ProfileId::Insurance(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label(), self.value())
    }
}

impl From<PatientId> for ProfileId {
    fn from(id: PatientId) -> Self {
        ProfileId::Patient(id)
    }
}

impl From<ValidatorId> for ProfileId {
    fn from(id: ValidatorId) -> Self {
        ProfileId::Validator(id)
    }
}

impl From<IssuerId> for ProfileId {
    fn from(id: IssuerId) -> Self {
        ProfileId::Issuer(id)
    }
}

impl From<InsuranceId> for ProfileId {
    fn from(id: InsuranceId) -> Self {
        ProfileId::Insurance(id)
    }
}

/// Server acknowledgement of a document upload
///
/// The upload endpoints answer with a message and whatever bookkeeping
/// fields the backend adds; the extra fields are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_display() {
        assert_eq!(ProfileId::from(PatientId::new(42)).to_string(), "patient_id=42");
    }

    #[test]
    fn test_profile_id_accessors() {
        let id = ProfileId::from(ValidatorId::new(5));
        assert_eq!(id.role(), Role::Validator);
        assert_eq!(id.as_validator(), Some(ValidatorId::new(5)));
        assert_eq!(id.as_patient(), None);
    }

    #[test]
    fn test_upload_receipt_keeps_extra_fields() {
        let receipt: UploadReceipt = serde_json::from_str(
            r#"{"message":"Documents uploaded","identity_document_url":"/files/1.pdf"}"#,
        )
        .unwrap();
        assert_eq!(receipt.message.as_deref(), Some("Documents uploaded"));
        assert_eq!(
            receipt.extra.get("identity_document_url").and_then(|v| v.as_str()),
            Some("/files/1.pdf")
        );
    }
}
