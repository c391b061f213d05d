//! Tests for the stub backend itself, driven with a plain reqwest client

use serde_json::json;
use test_utils::{RecordedBody, StubBackend, StubResponse};

#[tokio::test]
async fn test_scripted_json_response_and_recording() {
    let backend = StubBackend::start().await;
    backend.respond("POST", "/api/users", StubResponse::ok(json!({"user_id": 7})));

    let response = reqwest::Client::new()
        .post(format!("{}/api/users", backend.base_url()))
        .json(&json!({"wallet_address": "0xabc", "role": "patient"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user_id"], 7);

    let request = backend.single_request("/api/users");
    assert_eq!(request.method, "POST");
    assert_eq!(request.json().unwrap()["role"], "patient");
}

#[tokio::test]
async fn test_unscripted_route_is_not_found() {
    let backend = StubBackend::start().await;

    let response = reqwest::get(format!("{}/api/claims/by-patient/1?status=pending", backend.base_url()))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let request = backend.single_request("/api/claims/by-patient/1");
    assert_eq!(request.query_param("status"), Some("pending"));
    assert_eq!(request.body, RecordedBody::Empty);
}

#[tokio::test]
async fn test_multipart_parts_are_recorded() {
    let backend = StubBackend::start().await;
    backend.respond("POST", "/api/upload", StubResponse::ok(json!({"message": "ok"})));

    let form = reqwest::multipart::Form::new()
        .text("patient_id", "42")
        .part(
            "identity_document",
            reqwest::multipart::Part::bytes(vec![1, 2, 3])
                .file_name("id.pdf")
                .mime_str("application/pdf")
                .unwrap(),
        );

    reqwest::Client::new()
        .post(format!("{}/api/upload", backend.base_url()))
        .multipart(form)
        .send()
        .await
        .unwrap();

    let request = backend.single_request("/api/upload");
    assert!(request.is_multipart());
    assert_eq!(request.part_names(), vec!["patient_id", "identity_document"]);

    let id = request.part("patient_id").unwrap();
    assert_eq!(id.text.as_deref(), Some("42"));

    let file = request.part("identity_document").unwrap();
    assert!(file.is_file());
    assert_eq!(file.file_name.as_deref(), Some("id.pdf"));
    assert_eq!(file.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(file.size, 3);
}
