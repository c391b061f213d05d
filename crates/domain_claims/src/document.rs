//! Documents issued to patients by issuers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DocumentId, IssuerId, PatientId};

/// A medical document an issuer produced for a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedDocument {
    pub document_id: DocumentId,
    pub patient_id: PatientId,
    pub issuer_id: IssuerId,
    /// Free-form kind, e.g. "lab_report" or "prescription"
    pub document_type: String,
    pub document_url: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(with = "core_kernel::timestamp")]
    pub created_at: DateTime<Utc>,
}
