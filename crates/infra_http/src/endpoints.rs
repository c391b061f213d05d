//! Endpoint paths and their fallback error messages
//!
//! Paths are relative to the API root. A fallback is the rejection detail
//! used when the server's error body carries none.

pub const USERS: &str = "/users";
pub const CREATE_USER_FAILED: &str = "Failed to create user";

pub const PATIENT_BASIC_INFO: &str = "/patient/basic-info";
pub const PATIENT_BASIC_INFO_FAILED: &str = "Failed to save patient information";

pub const PATIENT_IDENTITY_INSURANCE: &str = "/patient/identity-insurance";
pub const PATIENT_IDENTITY_INSURANCE_FAILED: &str =
    "Failed to upload identity and insurance documents";

pub const VALIDATOR_BASIC_INFO: &str = "/validator/basic-info";
pub const VALIDATOR_BASIC_INFO_FAILED: &str = "Failed to save validator information";

pub const VALIDATOR_DOCUMENTS: &str = "/validator/documents";
pub const VALIDATOR_DOCUMENTS_FAILED: &str = "Failed to upload validator documents";

pub const ISSUER_BASIC_INFO: &str = "/issuer/basic-info";
pub const ISSUER_BASIC_INFO_FAILED: &str = "Failed to save issuer information";

pub const INSURANCE_BASIC_INFO: &str = "/insurance/basic-info";
pub const INSURANCE_BASIC_INFO_FAILED: &str = "Failed to save insurance information";

pub const FETCH_CLAIMS_FAILED: &str = "Failed to fetch claims";
pub const FETCH_ISSUED_DOCUMENTS_FAILED: &str = "Failed to fetch issued documents";

pub fn claims_by_patient(patient_id: impl std::fmt::Display) -> String {
    format!("/claims/by-patient/{}", patient_id)
}

pub fn claims_by_insurance(insurance_id: impl std::fmt::Display) -> String {
    format!("/claims/by-insurance/{}", insurance_id)
}

pub fn issued_docs_by_patient(patient_id: impl std::fmt::Display) -> String {
    format!("/issuer/issued-docs/by-patient/{}", patient_id)
}
