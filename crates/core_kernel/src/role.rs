//! Registration roles
//!
//! A user's role is chosen once at registration and never changes. It decides
//! which profile record extends the user and which dashboard the user lands on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Role a user registers under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Patient uploading identity and insurance documents
    Patient,
    /// Medical professional verifying documents
    Validator,
    /// Hospital or lab issuing medical documents
    Issuer,
    /// Insurance company reviewing claims
    Insurance,
}

impl Role {
    /// All roles, in the order they are offered at selection
    pub const ALL: [Role; 4] = [Role::Patient, Role::Validator, Role::Issuer, Role::Insurance];

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Validator => "validator",
            Role::Issuer => "issuer",
            Role::Insurance => "insurance",
        }
    }

    /// Dashboard route a signed-in user of this role is sent to
    pub fn dashboard_route(&self) -> &'static str {
        match self {
            Role::Patient => "/dashboard/patient",
            Role::Validator => "/dashboard/validator",
            Role::Issuer => "/dashboard/issuer",
            Role::Insurance => "/dashboard/insurance",
        }
    }

    /// Whether registration for this role includes a document upload step
    pub fn uploads_documents(&self) -> bool {
        matches!(self, Role::Patient | Role::Validator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok(Role::Patient),
            "validator" => Ok(Role::Validator),
            "issuer" => Ok(Role::Issuer),
            "insurance" => Ok(Role::Insurance),
            other => Err(CoreError::validation(format!("Unknown role: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("Validator".parse::<Role>().unwrap(), Role::Validator);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_name() {
        assert_eq!(serde_json::to_string(&Role::Insurance).unwrap(), "\"insurance\"");
    }

    #[test]
    fn test_document_roles() {
        assert!(Role::Patient.uploads_documents());
        assert!(!Role::Issuer.uploads_documents());
    }
}
