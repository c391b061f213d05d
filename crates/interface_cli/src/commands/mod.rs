//! Command execution
//!
//! Every command runs against an [`App`]: the HTTP client built from the
//! configuration and the session file. Output goes to the writer passed in,
//! so commands can be driven from tests as well as from the binary.

mod lists;
mod register;
mod session;
mod validate;

use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use core_kernel::RequestError;
use infra_http::ApiClient;

use crate::cli::{ClaimsCommand, Cli, Command};
use crate::config::ClientConfig;
use crate::session_store::SessionStore;

/// Resources shared by the commands of one invocation
pub struct App {
    config: ClientConfig,
    client: Arc<ApiClient>,
    store: SessionStore,
}

impl App {
    pub fn new(config: ClientConfig) -> Result<Self, RequestError> {
        let client = Arc::new(ApiClient::new(&config.http())?);
        let store = SessionStore::new(config.session_file.clone());
        Ok(Self { config, client, store })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client(&self) -> Arc<ApiClient> {
        self.client.clone()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Executes one command
    ///
    /// # Errors
    ///
    /// Returns the failure to report; the binary turns it into a non-zero
    /// exit status.
    pub async fn execute<W>(&self, command: Command, out: &mut W) -> anyhow::Result<()>
    where
        W: Write + Send,
    {
        match command {
            Command::Register(command) => register::run(self, command, out).await,
            Command::Claims(ClaimsCommand::Patient { patient_id }) => {
                lists::patient_claims(self, patient_id, out).await
            }
            Command::Claims(ClaimsCommand::Insurance { insurance_id, status }) => {
                lists::insurance_claims(self, insurance_id, status, out).await
            }
            Command::IssuedDocs { patient_id } => lists::issued_documents(self, patient_id, out).await,
            Command::Dashboard { patient_id } => lists::patient_dashboard(self, patient_id, out).await,
            Command::Validate { rule, value, optional } => validate::run(rule, &value, !optional, out),
            Command::Session(command) => session::run(self, command, out).await,
        }
    }
}

/// Applies command-line overrides to the loaded configuration
pub fn effective_config(cli: &Cli, config: ClientConfig) -> ClientConfig {
    let mut config = match &cli.api_base_url {
        Some(url) => config.with_api_base_url(url.clone()),
        None => config,
    };
    if let Some(path) = &cli.session_file {
        config.session_file = path.clone();
    }
    config
}

/// Builds the app from the parsed arguments and configuration, then runs the
/// command
pub async fn run<W>(cli: Cli, config: ClientConfig, out: &mut W) -> anyhow::Result<()>
where
    W: Write + Send,
{
    let app = App::new(effective_config(&cli, config))?;
    debug!(
        api_url = %app.client.api_url(),
        session_file = %app.config().session_file.display(),
        "Client configured"
    );
    app.execute(cli.command, out).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_flags_override_configuration() {
        let cli = Cli::try_parse_from([
            "medverify",
            "--api-base-url",
            "http://127.0.0.1:9000",
            "--session-file",
            "/tmp/other.json",
            "session",
            "show",
        ])
        .unwrap();

        let config = effective_config(&cli, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.session_file, PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn test_configuration_kept_without_flags() {
        let cli = Cli::try_parse_from(["medverify", "session", "show"]).unwrap();
        let config = effective_config(&cli, ClientConfig::default());
        assert_eq!(config, ClientConfig::default());
    }
}
