//! Pre-built Test Fixtures
//!
//! Fixed, valid test data for registrations, backend responses and list
//! records. Values are chosen to pass every validation rule.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use core_kernel::{
    ClaimId, DocumentId, FileUpload, InsuranceId, IssuerId, PatientId, Role, UserId,
};
use domain_claims::{Claim, ClaimStatus, IssuedDocument};
use domain_registration::{
    Gender, InsuranceDetails, InsuranceRegistration, IssuerDetails, IssuerRegistration,
    PatientDetails, PatientDocumentFiles, PatientRegistration, ValidatorDetails,
    ValidatorDocumentFiles, ValidatorRegistration,
};

/// Minimal PDF content for upload tests
pub static SAMPLE_PDF: Lazy<Vec<u8>> =
    Lazy::new(|| b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\ntrailer << >>\n%%EOF\n".to_vec());

/// Fixture for wallet addresses
pub struct WalletFixtures;

impl WalletFixtures {
    /// Checksummed-style address that passes the wallet rule
    pub fn valid() -> &'static str {
        "0x52908400098527886E0F7030069857D2E4169EE7"
    }

    pub fn lowercase() -> &'static str {
        "0xde709f2102306220921060314715629080e2fb77"
    }

    /// One hex digit short
    pub fn too_short() -> &'static str {
        "0x52908400098527886E0F7030069857D2E4169EE"
    }

    pub fn missing_prefix() -> &'static str {
        "52908400098527886E0F7030069857D2E4169EE7"
    }
}

/// Fixture for uploaded files
pub struct FileFixtures;

impl FileFixtures {
    pub fn pdf(name: &str) -> FileUpload {
        FileUpload::new(name, "application/pdf", SAMPLE_PDF.clone())
    }

    pub fn png(name: &str) -> FileUpload {
        FileUpload::new(name, "image/png", vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A])
    }
}

/// Fixture for timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 15, 0).unwrap()
    }

    pub fn date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 4, 12).unwrap()
    }
}

/// Fixture for registration forms
pub struct RegistrationFixtures;

impl RegistrationFixtures {
    pub fn patient_details() -> PatientDetails {
        PatientDetails {
            full_name: "Asha Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            phone: "9876543210".to_string(),
            date_of_birth: TemporalFixtures::date_of_birth(),
            gender: Gender::Female,
            address: Some("12 MG Road, Bengaluru".to_string()),
            emergency_contact: Some("+919812345678".to_string()),
        }
    }

    pub fn patient_documents() -> PatientDocumentFiles {
        PatientDocumentFiles {
            identity_document: FileFixtures::pdf("aadhaar.pdf"),
            insurance_document: Some(FileFixtures::png("policy-card.png")),
            aadhaar_number: Some("234567890123".to_string()),
            insurance_provider: Some("Star Health".to_string()),
            policy_number: Some("SH-99812".to_string()),
        }
    }

    /// Patient registration including documents
    pub fn patient() -> PatientRegistration {
        PatientRegistration {
            wallet_address: WalletFixtures::valid().to_string(),
            details: Self::patient_details(),
            documents: Some(Self::patient_documents()),
        }
    }

    pub fn validator() -> ValidatorRegistration {
        ValidatorRegistration {
            wallet_address: WalletFixtures::lowercase().to_string(),
            details: ValidatorDetails {
                full_name: "Dr Kiran Shah".to_string(),
                email: "kiran.shah@cityhospital.org".to_string(),
                phone: "+919812345678".to_string(),
                organization: "City Hospital".to_string(),
                license_number: "MCI/2011/4452".to_string(),
                specialization: Some("Radiology".to_string()),
            },
            documents: Some(ValidatorDocumentFiles {
                license_document: FileFixtures::pdf("license.pdf"),
                id_proof: None,
                notes: Some("License renewed in 2024".to_string()),
            }),
        }
    }

    pub fn issuer() -> IssuerRegistration {
        IssuerRegistration {
            wallet_address: WalletFixtures::valid().to_string(),
            details: IssuerDetails {
                organization_name: "Metro Diagnostics".to_string(),
                registration_number: "LAB-2024-001".to_string(),
                email: "labs@metro.example".to_string(),
                phone: "9123456780".to_string(),
                address: None,
            },
        }
    }

    pub fn insurance() -> InsuranceRegistration {
        InsuranceRegistration {
            wallet_address: WalletFixtures::valid().to_string(),
            details: InsuranceDetails {
                company_name: "Star Health".to_string(),
                license_number: "IRDAI-129".to_string(),
                email: "claims@starhealth.example".to_string(),
                phone: "18004252255".to_string(),
            },
        }
    }
}

/// Fixture for backend response bodies
pub struct ResponseFixtures;

impl ResponseFixtures {
    /// Body of a created user, with a naive timestamp as the backend emits
    pub fn user(user_id: i64, role: Role) -> Value {
        json!({
            "user_id": user_id,
            "wallet_address": WalletFixtures::valid(),
            "role": role.as_str(),
            "created_at": "2024-05-01T09:15:00",
            "updated_at": "2024-05-01T09:15:00.123456",
        })
    }

    pub fn patient_profile(patient_id: i64, user_id: i64) -> Value {
        json!({"patient_id": patient_id, "user_id": user_id, "full_name": "Asha Rao"})
    }

    pub fn validator_profile(validator_id: i64, user_id: i64) -> Value {
        json!({"validator_id": validator_id, "user_id": user_id})
    }

    pub fn issuer_profile(issuer_id: i64, user_id: i64) -> Value {
        json!({"issuer_id": issuer_id, "user_id": user_id})
    }

    pub fn insurance_profile(insurance_id: i64, user_id: i64) -> Value {
        json!({"insurance_id": insurance_id, "user_id": user_id})
    }

    pub fn upload_receipt(message: &str) -> Value {
        json!({"message": message, "identity_document_url": "/uploads/identity/1.pdf"})
    }

    pub fn claim(claim_id: i64, patient_id: i64, insurance_id: i64, status: ClaimStatus) -> Value {
        json!({
            "claim_id": claim_id,
            "patient_id": patient_id,
            "insurance_id": insurance_id,
            "report_url": format!("https://files.example/reports/{}.pdf", claim_id),
            "is_verified": status != ClaimStatus::Pending,
            "issued_by": "Metro Diagnostics",
            "status": status.as_str(),
            "created_at": "2024-05-01T09:15:00Z",
        })
    }

    pub fn issued_document(document_id: i64, patient_id: i64) -> Value {
        json!({
            "document_id": document_id,
            "patient_id": patient_id,
            "issuer_id": 2,
            "document_type": "lab_report",
            "document_url": format!("/docs/{}.pdf", document_id),
            "is_verified": false,
            "created_at": "2024-06-10T12:00:00+05:30",
        })
    }

    /// FastAPI-style error body
    pub fn detail(message: &str) -> Value {
        json!({"detail": message})
    }
}

/// Fixture for decoded list records
pub struct RecordFixtures;

impl RecordFixtures {
    pub fn claim(claim_id: i64, patient_id: i64, insurance_id: i64, status: ClaimStatus) -> Claim {
        Claim {
            claim_id: ClaimId::new(claim_id),
            patient_id: PatientId::new(patient_id),
            insurance_id: InsuranceId::new(insurance_id),
            report_url: format!("https://files.example/reports/{}.pdf", claim_id),
            is_verified: status != ClaimStatus::Pending,
            issued_by: Some("Metro Diagnostics".to_string()),
            status,
            created_at: TemporalFixtures::created_at(),
        }
    }

    pub fn issued_document(document_id: i64, patient_id: i64) -> IssuedDocument {
        IssuedDocument {
            document_id: DocumentId::new(document_id),
            patient_id: PatientId::new(patient_id),
            issuer_id: IssuerId::new(2),
            document_type: "lab_report".to_string(),
            document_url: format!("/docs/{}.pdf", document_id),
            is_verified: false,
            created_at: TemporalFixtures::created_at(),
        }
    }

    pub fn user_id() -> UserId {
        UserId::new(7)
    }
}
