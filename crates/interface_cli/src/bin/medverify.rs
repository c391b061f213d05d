//! MedVerify - Command-Line Client
//!
//! # Usage
//!
//! ```bash
//! # Register a patient with an identity document
//! medverify register patient --wallet-address 0x... --full-name "Asha Rao" \
//!     --email asha@example.com --phone 9876543210 --date-of-birth 1990-04-12 \
//!     --gender female --identity-document ./aadhaar.pdf
//!
//! # List an insurer's pending claims against a local backend
//! MEDVERIFY_API_BASE_URL=http://localhost:8000 medverify claims insurance 5 --status pending
//! ```
//!
//! # Environment Variables
//!
//! * `MEDVERIFY_API_BASE_URL` - Backend base URL (default: http://localhost:8000)
//! * `MEDVERIFY_APP_NAME` - Application display name
//! * `MEDVERIFY_ENVIRONMENT` - Deployment environment label
//! * `MEDVERIFY_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `MEDVERIFY_SESSION_FILE` - Session file (default: .medverify-session.json)
//! * `RUST_LOG` - Log filter, takes precedence over `MEDVERIFY_LOG_LEVEL`

use std::process::ExitCode;

use clap::Parser;

use interface_cli::{config::ClientConfig, telemetry::init_tracing, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config();

    init_tracing(&config.log_level);

    tracing::debug!(
        app_name = ?config.app_name,
        environment = ?config.environment,
        "Starting MedVerify client"
    );

    let mut stdout = std::io::stdout();
    match interface_cli::run(cli, config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration from environment variables, falling back to defaults
/// when they cannot be parsed.
fn load_config() -> ClientConfig {
    ClientConfig::from_env().unwrap_or_else(|error| {
        eprintln!("Ignoring invalid configuration: {}", error);
        ClientConfig::default()
    })
}
