//! End-to-end workflows over HTTP against the stub backend

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde_json::json;

use core_kernel::{PatientId, RequestError, Role, Session, UserId};
use domain_claims::{ClaimStatus, FetchOutcome, InsuranceDashboard, PatientDashboard};
use domain_registration::{RegistrationError, RegistrationService, RegistrationStep};
use infra_http::{ApiClient, HttpClientConfig};
use interface_cli::{Cli, CliError, ClientConfig, SessionStore};
use test_utils::{
    assert_multipart_fields, assert_rejected, RegistrationFixtures, ResponseFixtures, StubBackend,
    StubResponse, WalletFixtures, SAMPLE_PDF,
};

fn client_for(backend: &StubBackend) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&HttpClientConfig::new(backend.base_url())).unwrap())
}

/// Fresh path under the system temp dir, unique per test
fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("medverify-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_file(&path);
    path
}

fn script_patient_registration(backend: &StubBackend) {
    backend
        .respond("POST", "/api/users", StubResponse::ok(ResponseFixtures::user(7, Role::Patient)))
        .respond(
            "POST",
            "/api/patient/basic-info",
            StubResponse::ok(ResponseFixtures::patient_profile(42, 7)),
        )
        .respond(
            "POST",
            "/api/patient/identity-insurance",
            StubResponse::ok(ResponseFixtures::upload_receipt("Documents uploaded")),
        );
}

mod registration_workflow {
    use super::*;

    #[tokio::test]
    async fn test_patient_registration_over_http() {
        let backend = StubBackend::start().await;
        script_patient_registration(&backend);

        let service = RegistrationService::new(client_for(&backend));
        let registration = RegistrationFixtures::patient();

        let outcome = service.register_patient(registration).await.unwrap();
        assert_eq!(outcome.user_id, UserId::new(7));
        assert_eq!(outcome.profile_id.as_patient(), Some(PatientId::new(42)));
        assert_eq!(
            outcome.documents.unwrap().message.as_deref(),
            Some("Documents uploaded")
        );

        assert_eq!(
            backend.paths(),
            vec!["/api/users", "/api/patient/basic-info", "/api/patient/identity-insurance"]
        );

        let basic_info = backend.single_request("/api/patient/basic-info");
        assert_eq!(basic_info.json().unwrap()["user_id"], 7);

        let upload = backend.single_request("/api/patient/identity-insurance");
        assert_eq!(upload.part("patient_id").unwrap().text.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_profile_rejection_leaves_user_orphaned() {
        let backend = StubBackend::start().await;
        backend
            .respond("POST", "/api/users", StubResponse::ok(ResponseFixtures::user(7, Role::Patient)))
            .respond(
                "POST",
                "/api/patient/basic-info",
                StubResponse::json(400, ResponseFixtures::detail("Email already registered")),
            );

        let service = RegistrationService::new(client_for(&backend));
        let registration = RegistrationFixtures::patient();

        let error = service.register_patient(registration).await.unwrap_err();
        assert_eq!(error.step(), Some(RegistrationStep::CreateProfile));
        assert_eq!(error.orphaned_user(), Some(UserId::new(7)));
        assert_rejected(error.request_error().unwrap(), 400, "Email already registered");
        assert_eq!(error.user_message(), "Profile creation failed: Email already registered");

        assert!(backend.requests_to("/api/patient/identity-insurance").is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_wallet_stops_before_profile() {
        let backend = StubBackend::start().await;
        backend.respond(
            "POST",
            "/api/users",
            StubResponse::json(400, ResponseFixtures::detail("User with this wallet address already exists")),
        );

        let service = RegistrationService::new(client_for(&backend));
        let error = service.register_issuer(RegistrationFixtures::issuer()).await.unwrap_err();

        assert!(matches!(
            error,
            RegistrationError::StepFailed { step: RegistrationStep::CreateUser, user_id: None, .. }
        ));
        assert_eq!(backend.paths(), vec!["/api/users"]);
    }

    #[tokio::test]
    async fn test_unreachable_backend_fails_first_step() {
        let base_url = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };
        let client = Arc::new(ApiClient::new(&HttpClientConfig::new(base_url)).unwrap());

        let error = RegistrationService::new(client)
            .register_insurance(RegistrationFixtures::insurance())
            .await
            .unwrap_err();

        assert!(matches!(error.request_error(), Some(RequestError::Transport { .. })));
        assert_eq!(
            error.user_message(),
            "User creation failed: Network error: unable to reach the server"
        );
    }
}

mod dashboard_workflow {
    use super::*;

    #[tokio::test]
    async fn test_patient_lists_load_independently() {
        let backend = StubBackend::start().await;
        backend
            .respond("GET", "/api/claims/by-patient/42", StubResponse::text(500, "boom"))
            .respond(
                "GET",
                "/api/issuer/issued-docs/by-patient/42",
                StubResponse::ok(json!([ResponseFixtures::issued_document(8, 42)])),
            );

        let client = client_for(&backend);
        let dashboard = PatientDashboard::new(client.clone(), client);
        let outcomes = dashboard.mount(PatientId::new(42)).await;
        assert_eq!(outcomes, (FetchOutcome::Applied, FetchOutcome::Applied));

        let claims = dashboard.claims.snapshot();
        assert_eq!(claims.error.as_deref(), Some("Failed to fetch claims"));
        assert!(claims.items.is_empty());
        assert!(!claims.loading);

        let documents = dashboard.documents.snapshot();
        assert_eq!(documents.error, None);
        assert_eq!(documents.items.len(), 1);
        assert!(documents.last_loaded_at.is_some());
    }

    #[tokio::test]
    async fn test_insurance_filter_reloads_with_status() {
        let backend = StubBackend::start().await;
        backend.respond(
            "GET",
            "/api/claims/by-insurance/5",
            StubResponse::ok(json!([
                ResponseFixtures::claim(1, 42, 5, ClaimStatus::Pending),
                ResponseFixtures::claim(2, 43, 5, ClaimStatus::Pending),
            ])),
        );

        let dashboard = InsuranceDashboard::new(client_for(&backend));
        dashboard.mount(core_kernel::InsuranceId::new(5), None).await;
        assert_eq!(dashboard.pending_count(), 2);

        let outcome = dashboard.filter_by(Some(ClaimStatus::Pending)).await;
        assert_eq!(outcome, FetchOutcome::Applied);

        let requests = backend.requests_to("/api/claims/by-insurance/5");
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].query_param("status"), None);
        assert_eq!(requests[1].query_param("status"), Some("pending"));
    }
}

mod cli_workflow {
    use super::*;

    fn config_for(backend: &StubBackend, session_file: &PathBuf) -> ClientConfig {
        let mut config = ClientConfig::default().with_api_base_url(backend.base_url());
        config.session_file = session_file.clone();
        config
    }

    async fn run(args: &[&str], config: ClientConfig) -> (anyhow::Result<()>, String) {
        let mut argv = vec!["medverify"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        let result = interface_cli::run(cli, config, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_register_patient_signs_in() {
        let backend = StubBackend::start().await;
        script_patient_registration(&backend);

        let session_file = temp_path("register-patient.json");
        let document = temp_path("aadhaar.pdf");
        std::fs::write(&document, SAMPLE_PDF.as_slice()).unwrap();
        let document_arg = document.to_string_lossy().into_owned();

        let (result, output) = run(
            &[
                "register", "patient",
                "--wallet-address", WalletFixtures::valid(),
                "--full-name", "Asha Rao",
                "--email", "asha@example.com",
                "--phone", "9876543210",
                "--date-of-birth", "1990-04-12",
                "--gender", "female",
                "--identity-document", document_arg.as_str(),
                "--aadhaar-number", "234567890123",
            ],
            config_for(&backend, &session_file),
        )
        .await;

        result.unwrap();
        assert!(output.contains(r#""user_id": 7"#), "output was {}", output);
        assert!(output.contains("Dashboard: /dashboard/patient"));

        let upload = backend.single_request("/api/patient/identity-insurance");
        assert_multipart_fields(&upload, &["patient_id", "identity_document", "aadhaar_number"]);
        let identity = upload.part("identity_document").unwrap();
        assert_eq!(identity.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(identity.size, SAMPLE_PDF.len());

        let session = SessionStore::new(&session_file).load().await.unwrap();
        assert_eq!(session.role, Some(Role::Patient));
        assert_eq!(session.user_id, Some(UserId::new(7)));

        let _ = std::fs::remove_file(&session_file);
        let _ = std::fs::remove_file(&document);
    }

    #[tokio::test]
    async fn test_failed_registration_keeps_session_and_reports_orphan() {
        let backend = StubBackend::start().await;
        backend
            .respond("POST", "/api/users", StubResponse::ok(ResponseFixtures::user(11, Role::Insurance)))
            .respond(
                "POST",
                "/api/insurance/basic-info",
                StubResponse::json(400, ResponseFixtures::detail("License already registered")),
            );

        let session_file = temp_path("register-insurance.json");
        let (result, output) = run(
            &[
                "register", "insurance",
                "--wallet-address", WalletFixtures::valid(),
                "--company-name", "Star Health",
                "--license-number", "IRDAI-129",
                "--email", "claims@starhealth.example",
                "--phone", "18004252255",
            ],
            config_for(&backend, &session_file),
        )
        .await;

        let error = result.unwrap_err().downcast::<CliError>().unwrap();
        match error {
            CliError::Registration { message, orphaned_user } => {
                assert_eq!(orphaned_user, Some(UserId::new(11)));
                assert!(message.contains("License already registered"));
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(output.is_empty());
        assert!(!session_file.exists());
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let backend = StubBackend::start().await;
        let session_file = temp_path("register-invalid.json");

        let (result, _) = run(
            &[
                "register", "issuer",
                "--wallet-address", WalletFixtures::too_short(),
                "--organization-name", "Metro Diagnostics",
                "--registration-number", "LAB-2024-001",
                "--email", "labs@metro.example",
                "--phone", "9123456780",
            ],
            config_for(&backend, &session_file),
        )
        .await;

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Please correct the highlighted fields"), "{}", message);
        assert!(message.contains("wallet_address"), "{}", message);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_claims_insurance_command() {
        let backend = StubBackend::start().await;
        backend.respond(
            "GET",
            "/api/claims/by-insurance/5",
            StubResponse::ok(json!([ResponseFixtures::claim(1, 42, 5, ClaimStatus::Approved)])),
        );

        let session_file = temp_path("claims.json");
        let (result, output) = run(
            &["claims", "insurance", "5", "--status", "approved"],
            config_for(&backend, &session_file),
        )
        .await;

        result.unwrap();
        assert!(output.starts_with("approved claims for insurer 5 (1)\n"), "{}", output);
        assert!(output.contains("#1 approved"));
        assert!(output.ends_with("Pending: 0\n"));
        assert_eq!(
            backend.single_request("/api/claims/by-insurance/5").query_param("status"),
            Some("approved")
        );
    }

    #[tokio::test]
    async fn test_claims_command_reports_list_failure() {
        let backend = StubBackend::start().await;
        backend.respond(
            "GET",
            "/api/claims/by-patient/42",
            StubResponse::json(404, ResponseFixtures::detail("Patient not found")),
        );

        let session_file = temp_path("claims-failure.json");
        let (result, output) = run(&["claims", "patient", "42"], config_for(&backend, &session_file)).await;

        assert_eq!(result.unwrap_err().to_string(), "Claims: Patient not found");
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_shows_both_lists() {
        let backend = StubBackend::start().await;
        backend
            .respond("GET", "/api/claims/by-patient/42", StubResponse::empty(503))
            .respond(
                "GET",
                "/api/issuer/issued-docs/by-patient/42",
                StubResponse::ok(json!([ResponseFixtures::issued_document(8, 42)])),
            );

        let session_file = temp_path("dashboard.json");
        let (result, output) = run(&["dashboard", "42"], config_for(&backend, &session_file)).await;

        result.unwrap();
        assert!(output.contains("Claims: Failed to fetch claims"), "{}", output);
        assert!(output.contains("Issued documents (1)"), "{}", output);
    }

    #[tokio::test]
    async fn test_session_role_show_and_logout() {
        let backend = StubBackend::start().await;
        let session_file = temp_path("session.json");

        let (result, output) = run(&["session", "role", "validator"], config_for(&backend, &session_file)).await;
        result.unwrap();
        assert_eq!(output, "Selected role validator\n");

        let (result, output) = run(&["session", "show"], config_for(&backend, &session_file)).await;
        result.unwrap();
        assert!(output.contains(r#""role": "validator""#), "{}", output);
        assert!(output.ends_with("Dashboard: /dashboard/validator\n"));

        let (result, _) = run(&["session", "logout"], config_for(&backend, &session_file)).await;
        result.unwrap();
        assert!(!session_file.exists());

        let session = SessionStore::new(&session_file).load().await.unwrap();
        assert_eq!(session, Session::new());
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_validate_command() {
        let backend = StubBackend::start().await;
        let session_file = temp_path("validate.json");

        let (result, output) =
            run(&["validate", "aadhaar", "234567890123"], config_for(&backend, &session_file)).await;
        result.unwrap();
        assert_eq!(output, "valid aadhaar\n");

        let (result, _) = run(&["validate", "aadhaar", "1234"], config_for(&backend, &session_file)).await;
        assert!(matches!(
            result.unwrap_err().downcast::<CliError>().unwrap(),
            CliError::InvalidValue { .. }
        ));
    }
}
