//! Client configuration

use std::path::PathBuf;

use serde::Deserialize;

use infra_http::{HttpClientConfig, DEFAULT_API_BASE_URL};

/// Prefix of every configuration variable
pub const ENV_PREFIX: &str = "MEDVERIFY";

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_SESSION_FILE: &str = ".medverify-session.json";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, without the `/api` suffix
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Display name of the application
    #[serde(default)]
    pub app_name: Option<String>,
    /// Deployment environment label
    #[serde(default)]
    pub environment: Option<String>,
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// File the session is persisted to between invocations
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from(DEFAULT_SESSION_FILE)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            app_name: None,
            environment: None,
            log_level: default_log_level(),
            session_file: default_session_file(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from `MEDVERIFY_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(None)
    }

    /// Loads configuration from an explicit variable map instead of the
    /// process environment
    pub fn from_source(
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(vars))
            .build()?
            .try_deserialize()
    }

    /// Replaces the backend URL, e.g. from a command-line flag
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// HTTP client settings derived from this configuration
    pub fn http(&self) -> HttpClientConfig {
        HttpClientConfig::new(self.api_base_url.clone())
    }
}
