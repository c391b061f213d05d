//! Unit tests for the Identifiers module
//!
//! Tests cover creation, parsing, conversion, and the decimal display that
//! path parameters and multipart fields rely on.

use core_kernel::{UserId, PatientId, ValidatorId, IssuerId, InsuranceId, ClaimId, DocumentId};
use proptest::prelude::*;

mod user_id_tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        let id = UserId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(i64::from(id), 7);
        assert_eq!(UserId::from(7), id);
    }

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(UserId::new(1024).to_string(), "1024");
    }

    #[test]
    fn test_parse_rejects_prefixed_values() {
        assert!("USR-7".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(UserId::new(1) < UserId::new(2));
    }
}

mod wire_format_tests {
    use super::*;

    #[test]
    fn test_ids_deserialize_from_numbers() {
        let patient: PatientId = serde_json::from_str("42").unwrap();
        let claim: ClaimId = serde_json::from_str("9001").unwrap();
        assert_eq!(patient, PatientId::new(42));
        assert_eq!(claim, ClaimId::new(9001));
    }

    #[test]
    fn test_ids_reject_strings() {
        assert!(serde_json::from_str::<DocumentId>("\"42\"").is_err());
    }

    #[test]
    fn test_labels_match_backend_fields() {
        assert_eq!(PatientId::label(), "patient_id");
        assert_eq!(ValidatorId::label(), "validator_id");
        assert_eq!(IssuerId::label(), "issuer_id");
        assert_eq!(InsuranceId::label(), "insurance_id");
        assert_eq!(DocumentId::label(), "document_id");
    }
}

proptest! {
    #[test]
    fn display_then_parse_is_identity(raw in any::<i64>()) {
        let id = ValidatorId::new(raw);
        let parsed: ValidatorId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }
}
