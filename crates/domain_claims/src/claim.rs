//! Claim records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, InsuranceId, PatientId};
use crate::error::ClaimError;

/// Claim status
///
/// Serialized lowercase; decoded with the same case-insensitive parsing as
/// [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ClaimStatus {
    /// Awaiting the insurer's decision
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected];

    /// Wire value, as used in the `status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ClaimError::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for ClaimStatus {
    type Error = ClaimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An insurance claim backed by a medical report
///
/// Claims are read-only on the client: they are listed and rendered, never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: ClaimId,
    pub patient_id: PatientId,
    pub insurance_id: InsuranceId,
    /// Location of the medical report the claim is based on
    pub report_url: String,
    /// Whether a validator has verified the report
    #[serde(default)]
    pub is_verified: bool,
    /// Issuer that produced the report, if known
    #[serde(default)]
    pub issued_by: Option<String>,
    pub status: ClaimStatus,
    #[serde(with = "core_kernel::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Claim {
    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }
}
