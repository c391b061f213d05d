//! Custom Test Assertions
//!
//! Assertion helpers that give more meaningful failure messages than
//! comparing whole values.

use core_kernel::RequestError;

use crate::stub_backend::{RecordedBody, RecordedRequest};

/// Asserts that an error is a rejection with the given status and detail
///
/// # Panics
///
/// Panics if the error is not `RequestError::Rejected`, or if the status or
/// detail differ.
pub fn assert_rejected(error: &RequestError, status: u16, detail: &str) {
    match error {
        RequestError::Rejected { status: actual_status, detail: actual_detail } => {
            assert_eq!(
                *actual_status, status,
                "Rejection status mismatch: actual={}, expected={}",
                actual_status, status
            );
            assert_eq!(
                actual_detail, detail,
                "Rejection detail mismatch: actual={:?}, expected={:?}",
                actual_detail, detail
            );
        }
        other => panic!("Expected a rejection ({}: {}), got {:?}", status, detail, other),
    }
}

/// Asserts that an error is a transport failure
pub fn assert_transport(error: &RequestError) {
    assert!(
        matches!(error, RequestError::Transport { .. }),
        "Expected a transport error, got {:?}",
        error
    );
}

/// Asserts that a request carried a JSON body
pub fn assert_json_request(request: &RecordedRequest) {
    assert!(
        matches!(request.body, RecordedBody::Json(_)),
        "Expected a JSON body for {} {}, got {:?} ({:?})",
        request.method,
        request.path,
        request.body,
        request.content_type
    );
}

/// Asserts that a request was multipart with exactly the given parts, in order
///
/// # Panics
///
/// Panics if the body is not multipart or a part is missing, extra, or
/// repeated.
pub fn assert_multipart_fields(request: &RecordedRequest, expected: &[&str]) {
    assert!(
        request.is_multipart(),
        "Expected multipart/form-data for {} {}, got {:?}",
        request.method,
        request.path,
        request.content_type
    );
    assert_eq!(
        request.part_names(),
        expected,
        "Multipart fields mismatch for {} {}",
        request.method,
        request.path
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_rejected_accepts_matching_error() {
        assert_rejected(&RequestError::rejected(400, "Invalid wallet"), 400, "Invalid wallet");
    }

    #[test]
    #[should_panic(expected = "Expected a rejection")]
    fn test_assert_rejected_panics_on_transport() {
        assert_rejected(&RequestError::transport("refused"), 400, "Invalid wallet");
    }
}
