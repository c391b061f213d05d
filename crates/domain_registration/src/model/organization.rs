//! Organisation profiles: document issuers and insurance companies
//!
//! Neither role uploads documents at registration; both finish once the
//! basic-info record exists.

use serde::{Deserialize, Serialize};

use core_kernel::{InsuranceId, IssuerId, UserId};
use domain_validation::{FormValidator, RuleName, Validate, ValidationResult};

/// Details entered on the issuer (hospital, lab) form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerDetails {
    pub organization_name: String,
    pub registration_number: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body of `POST /issuer/basic-info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerBasicInfo {
    pub user_id: UserId,
    #[serde(flatten)]
    pub details: IssuerDetails,
}

/// Issuer profile returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerProfile {
    pub issuer_id: IssuerId,
    pub user_id: UserId,
    #[serde(default)]
    pub organization_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerRegistration {
    pub wallet_address: String,
    pub details: IssuerDetails,
}

impl IssuerRegistration {
    pub fn basic_info(&self, user_id: UserId) -> IssuerBasicInfo {
        IssuerBasicInfo {
            user_id,
            details: self.details.clone(),
        }
    }
}

impl Validate for IssuerRegistration {
    fn validate(&self) -> ValidationResult {
        FormValidator::new()
            .field("wallet_address", &self.wallet_address, RuleName::WalletAddress, true)
            .required_text("organization_name", &self.details.organization_name)
            .field(
                "registration_number",
                &self.details.registration_number,
                RuleName::LicenseNumber,
                true,
            )
            .field("email", &self.details.email, RuleName::Email, true)
            .field("phone", &self.details.phone, RuleName::Phone, true)
            .finish()
    }
}

/// Details entered on the insurance company form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceDetails {
    pub company_name: String,
    pub license_number: String,
    pub email: String,
    pub phone: String,
}

/// Body of `POST /insurance/basic-info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceBasicInfo {
    pub user_id: UserId,
    #[serde(flatten)]
    pub details: InsuranceDetails,
}

/// Insurance company profile returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceProfile {
    pub insurance_id: InsuranceId,
    pub user_id: UserId,
    #[serde(default)]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsuranceRegistration {
    pub wallet_address: String,
    pub details: InsuranceDetails,
}

impl InsuranceRegistration {
    pub fn basic_info(&self, user_id: UserId) -> InsuranceBasicInfo {
        InsuranceBasicInfo {
            user_id,
            details: self.details.clone(),
        }
    }
}

impl Validate for InsuranceRegistration {
    fn validate(&self) -> ValidationResult {
        FormValidator::new()
            .field("wallet_address", &self.wallet_address, RuleName::WalletAddress, true)
            .required_text("company_name", &self.details.company_name)
            .field("license_number", &self.details.license_number, RuleName::LicenseNumber, true)
            .field("email", &self.details.email, RuleName::Email, true)
            .field("phone", &self.details.phone, RuleName::Phone, true)
            .finish()
    }
}
