//! REST client configuration and request plumbing
//!
//! Every request goes to `{api_base_url}/api{path}` and is sent exactly once.
//! No timeout is configured on the client: a request that never completes
//! keeps its caller waiting.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::RequestError;

use crate::error;
use crate::multipart::MultipartPayload;

/// Backend location used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Configuration for the REST client
///
/// # Example
///
/// ```rust
/// use infra_http::HttpClientConfig;
///
/// let config = HttpClientConfig::new("https://api.medverify.example/");
/// assert_eq!(config.api_url(), "https://api.medverify.example/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Backend origin, without the `/api` prefix
    pub api_base_url: String,
}

impl HttpClientConfig {
    /// Creates a configuration for the given backend origin
    ///
    /// # Arguments
    ///
    /// * `api_base_url` - Origin such as "http://localhost:8000"
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    /// Root every endpoint path is appended to
    pub fn api_url(&self) -> String {
        format!("{}/api", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Client for the MedVerify REST API
///
/// Cheap to clone; clones share the connection pool. The domain ports are
/// implemented on this type in [`crate::adapters`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_url: String,
}

impl ApiClient {
    /// Creates a client for the configured backend
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Transport` if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &HttpClientConfig) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("medverify-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RequestError::transport_from("Failed to build HTTP client", e))?;

        Ok(Self {
            http,
            api_url: config.api_url(),
        })
    }

    /// Root URL of the API, e.g. "http://localhost:8000/api"
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full URL of an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub(crate) async fn get_json<R>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &'static str,
    ) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(Method::GET, &url, request, fallback).await
    }

    pub(crate) async fn post_json<B, R>(
        &self,
        path: &str,
        body: &B,
        fallback: &'static str,
    ) -> Result<R, RequestError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let request = self.http.post(&url).json(body);
        self.send(Method::POST, &url, request, fallback).await
    }

    pub(crate) async fn post_multipart<R>(
        &self,
        path: &str,
        payload: MultipartPayload,
        fallback: &'static str,
    ) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, fields = ?payload.field_names(), "Encoding multipart body");
        let form = payload.into_form()?;
        let request = self.http.post(&url).multipart(form);
        self.send(Method::POST, &url, request, fallback).await
    }

    async fn send<R>(
        &self,
        method: Method,
        url: &str,
        request: RequestBuilder,
        fallback: &'static str,
    ) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
    {
        debug!(%method, url, "Sending request");

        let response = request.send().await.map_err(error::from_reqwest)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let detail = error::extract_detail(&body).unwrap_or_else(|| fallback.to_string());
            warn!(%method, url, status = status.as_u16(), detail = %detail, "Request rejected");
            return Err(RequestError::rejected(status.as_u16(), detail));
        }

        let body = response.bytes().await.map_err(error::from_reqwest)?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(%method, url, error = %e, "Unexpected response body");
            RequestError::decode(format!("Unexpected response from {}: {}", url, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_trims_trailing_slashes() {
        assert_eq!(HttpClientConfig::new("http://host:8000//").api_url(), "http://host:8000/api");
        assert_eq!(HttpClientConfig::default().api_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_url_joins_path() {
        let client = ApiClient::new(&HttpClientConfig::new("http://host")).unwrap();
        assert_eq!(client.url("/claims/by-patient/42"), "http://host/api/claims/by-patient/42");
    }
}
