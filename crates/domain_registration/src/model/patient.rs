//! Patient profiles and identity/insurance documents

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, FileUpload, PatientId, UserId};
use domain_validation::{FormValidator, RuleName, Validate, ValidationResult};

/// Patient gender as recorded on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(CoreError::validation(format!("Unknown gender: {}", other))),
        }
    }
}

/// Personal details entered on the patient form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

/// Body of `POST /patient/basic-info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientBasicInfo {
    pub user_id: UserId,
    #[serde(flatten)]
    pub details: PatientDetails,
}

/// Patient profile returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub patient_id: PatientId,
    pub user_id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Files and identity fields entered on the documents step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDocumentFiles {
    pub identity_document: FileUpload,
    pub insurance_document: Option<FileUpload>,
    pub aadhaar_number: Option<String>,
    pub insurance_provider: Option<String>,
    pub policy_number: Option<String>,
}

/// Multipart body of `POST /patient/identity-insurance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientIdentityInsurance {
    pub patient_id: PatientId,
    pub files: PatientDocumentFiles,
}

/// Everything the patient registration form collects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRegistration {
    pub wallet_address: String,
    pub details: PatientDetails,
    /// Absent when the patient skips the document step
    pub documents: Option<PatientDocumentFiles>,
}

impl PatientRegistration {
    /// Builds the basic-info request for a freshly created user
    pub fn basic_info(&self, user_id: UserId) -> PatientBasicInfo {
        PatientBasicInfo {
            user_id,
            details: self.details.clone(),
        }
    }

    /// Builds the upload request for a freshly created profile
    pub fn identity_insurance(&self, patient_id: PatientId) -> Option<PatientIdentityInsurance> {
        self.documents.as_ref().map(|files| PatientIdentityInsurance {
            patient_id,
            files: files.clone(),
        })
    }
}

impl Validate for PatientDetails {
    fn validate(&self) -> ValidationResult {
        let mut form = FormValidator::new()
            .field("full_name", &self.full_name, RuleName::Name, true)
            .field("email", &self.email, RuleName::Email, true)
            .field("phone", &self.phone, RuleName::Phone, true)
            .optional("emergency_contact", self.emergency_contact.as_deref(), RuleName::Phone);

        if self.date_of_birth > Utc::now().date_naive() {
            form = form.error("date_of_birth", "Date of birth cannot be in the future");
        }

        form.finish()
    }
}

impl Validate for PatientDocumentFiles {
    fn validate(&self) -> ValidationResult {
        let mut form = FormValidator::new()
            .optional("aadhaar_number", self.aadhaar_number.as_deref(), RuleName::Aadhaar);

        if self.identity_document.is_empty() {
            form = form.error("identity_document", "Identity document is empty");
        }
        if self.insurance_document.as_ref().is_some_and(FileUpload::is_empty) {
            form = form.error("insurance_document", "Insurance document is empty");
        }

        let has_provider = self
            .insurance_provider
            .as_deref()
            .is_some_and(|provider| !provider.trim().is_empty());
        if has_provider {
            form = form.required_text("policy_number", self.policy_number.as_deref().unwrap_or(""));
        }

        form.finish()
    }
}

impl Validate for PatientRegistration {
    fn validate(&self) -> ValidationResult {
        let mut result = FormValidator::new()
            .field("wallet_address", &self.wallet_address, RuleName::WalletAddress, true)
            .finish();
        result.merge(self.details.validate());
        if let Some(documents) = &self.documents {
            result.merge(documents.validate());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parses_case_insensitively() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" other ".parse::<Gender>().unwrap(), Gender::Other);
        assert!("unknown".parse::<Gender>().is_err());
    }

    fn details() -> PatientDetails {
        PatientDetails {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            gender: Gender::Female,
            address: None,
            emergency_contact: None,
        }
    }

    #[test]
    fn test_basic_info_flattens_details() {
        let registration = PatientRegistration {
            wallet_address: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
            details: details(),
            documents: None,
        };

        let json = serde_json::to_value(registration.basic_info(UserId::new(7))).unwrap();
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["full_name"], "Asha Rao");
        assert_eq!(json["date_of_birth"], "1990-04-12");
        assert_eq!(json["gender"], "female");
        assert!(json.get("address").is_none());
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let mut details = details();
        details.date_of_birth = Utc::now().date_naive() + chrono::Days::new(2);
        let result = details.validate();
        assert!(result.error_for("date_of_birth").is_some());
    }

    #[test]
    fn test_provider_requires_policy_number() {
        let files = PatientDocumentFiles {
            identity_document: FileUpload::new("id.pdf", "application/pdf", vec![1]),
            insurance_document: None,
            aadhaar_number: None,
            insurance_provider: Some("Star Health".to_string()),
            policy_number: None,
        };
        let result = files.validate();
        assert!(result.error_for("policy_number").is_some());
    }

    #[test]
    fn test_no_documents_means_no_upload_request() {
        let registration = PatientRegistration {
            wallet_address: String::new(),
            details: details(),
            documents: None,
        };
        assert!(registration.identity_insurance(PatientId::new(1)).is_none());
    }
}
