//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::ports::{RequestError, NETWORK_FAILURE_MESSAGE};

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_file() {
    let error = CoreError::file("Cannot read aadhaar.pdf: permission denied");
    assert!(matches!(error, CoreError::File(_)));
    assert_eq!(error.to_string(), "File error: Cannot read aadhaar.pdf: permission denied");
}

#[test]
fn test_core_error_session() {
    let error = CoreError::session("No user signed in");
    assert_eq!(error.to_string(), "Session error: No user signed in");
}

#[test]
fn test_request_error_user_messages() {
    assert_eq!(
        RequestError::rejected(422, "Invalid wallet address").user_message(),
        "Invalid wallet address"
    );
    assert_eq!(
        RequestError::transport("dns failure").user_message(),
        NETWORK_FAILURE_MESSAGE
    );
    assert_eq!(
        RequestError::decode("missing field `user_id`").user_message(),
        "missing field `user_id`"
    );
}

#[test]
fn test_request_error_only_rejections_have_status() {
    assert_eq!(RequestError::rejected(500, "boom").status(), Some(500));
    assert_eq!(RequestError::encode("bad mime").status(), None);
    assert!(!RequestError::decode("x").is_rejection());
}
