//! Test Data Builders
//!
//! Builders for registration forms with randomized but valid defaults.
//! Tests set only the fields they care about.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use core_kernel::FileUpload;
use domain_registration::{
    Gender, PatientDetails, PatientDocumentFiles, PatientRegistration,
};

use crate::fixtures::{FileFixtures, RegistrationFixtures, TemporalFixtures};

const HEX_DIGITS: &[u8] = b"0123456789abcdefABCDEF";

/// Random address that passes the wallet rule
pub fn fake_wallet_address() -> String {
    let digits: String = (0..40)
        .map(|_| HEX_DIGITS[(0..HEX_DIGITS.len()).fake::<usize>()] as char)
        .collect();
    format!("0x{}", digits)
}

/// Random 10-digit mobile number
pub fn fake_phone() -> String {
    (6_000_000_000u64..9_999_999_999u64).fake::<u64>().to_string()
}

/// Random name made of letters only
pub fn fake_full_name() -> String {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    let name: String = format!("{} {}", first, last)
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();
    name.chars().take(50).collect()
}

/// Builder for patient registrations
pub struct PatientRegistrationBuilder {
    wallet_address: String,
    details: PatientDetails,
    documents: Option<PatientDocumentFiles>,
}

impl Default for PatientRegistrationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientRegistrationBuilder {
    /// Creates a builder with a random valid patient and no documents
    pub fn new() -> Self {
        Self {
            wallet_address: fake_wallet_address(),
            details: PatientDetails {
                full_name: fake_full_name(),
                email: SafeEmail().fake(),
                phone: fake_phone(),
                date_of_birth: TemporalFixtures::date_of_birth(),
                gender: Gender::Other,
                address: None,
                emergency_contact: None,
            },
            documents: None,
        }
    }

    pub fn with_wallet_address(mut self, wallet_address: impl Into<String>) -> Self {
        self.wallet_address = wallet_address.into();
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.details.full_name = full_name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.details.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.details.phone = phone.into();
        self
    }

    /// Attaches the standard identity and insurance documents
    pub fn with_documents(mut self) -> Self {
        self.documents = Some(RegistrationFixtures::patient_documents());
        self
    }

    /// Attaches only an identity document
    pub fn with_identity_document(mut self, file: FileUpload) -> Self {
        self.documents = Some(PatientDocumentFiles {
            identity_document: file,
            insurance_document: None,
            aadhaar_number: None,
            insurance_provider: None,
            policy_number: None,
        });
        self
    }

    pub fn without_documents(mut self) -> Self {
        self.documents = None;
        self
    }

    pub fn build(self) -> PatientRegistration {
        PatientRegistration {
            wallet_address: self.wallet_address,
            details: self.details,
            documents: self.documents,
        }
    }
}

/// Shorthand for a valid patient registration with an identity document
pub fn patient_with_identity_document() -> PatientRegistration {
    PatientRegistrationBuilder::new()
        .with_identity_document(FileFixtures::pdf("identity.pdf"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_validation::{validate, RuleName, Validate};

    #[test]
    fn test_fake_values_pass_rules() {
        for _ in 0..50 {
            assert_eq!(validate(&fake_wallet_address(), RuleName::WalletAddress, true), None);
            assert_eq!(validate(&fake_phone(), RuleName::Phone, true), None);
        }
    }

    #[test]
    fn test_builder_defaults_are_valid() {
        let registration = PatientRegistrationBuilder::new().with_documents().build();
        let result = registration.validate();
        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn test_builder_overrides() {
        let registration = PatientRegistrationBuilder::new()
            .with_email("bad-email")
            .build();
        assert!(registration.validate().error_for("email").is_some());
        assert!(registration.documents.is_none());
    }
}
