//! Strongly-typed identifiers for backend entities
//!
//! The backend issues plain integer keys. Wrapping each one in its own newtype
//! keeps a `patient_id` from being passed where a `user_id` is expected, while
//! serializing transparently as the bare number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw backend key
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw backend key
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the field name used for this identifier on the wire
            pub fn label() -> &'static str {
                $label
            }
        }

        // Path parameters and multipart fields carry ids as decimal strings,
        // so Display must stay the bare number.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// Accounts and profiles
define_id!(UserId, "user_id");
define_id!(PatientId, "patient_id");
define_id!(ValidatorId, "validator_id");
define_id!(IssuerId, "issuer_id");
define_id!(InsuranceId, "insurance_id");

// Records
define_id!(ClaimId, "claim_id");
define_id!(DocumentId, "document_id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_displays_as_decimal() {
        assert_eq!(PatientId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_parsing() {
        let parsed: UserId = " 7 ".parse().unwrap();
        assert_eq!(parsed, UserId::new(7));
        assert!("seven".parse::<UserId>().is_err());
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&ValidatorId::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: ValidatorId = serde_json::from_str("12").unwrap();
        assert_eq!(back.value(), 12);
    }

    #[test]
    fn test_label() {
        assert_eq!(UserId::label(), "user_id");
        assert_eq!(InsuranceId::label(), "insurance_id");
    }
}
