//! Domain Adapters
//!
//! Implementations of the domain ports on [`ApiClient`](crate::ApiClient).
//! Each port method maps to exactly one endpoint; see [`crate::endpoints`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_registration::RegistrationService;
//! use infra_http::{ApiClient, HttpClientConfig};
//!
//! let client = Arc::new(ApiClient::new(&HttpClientConfig::default())?);
//! let service = RegistrationService::new(client.clone());
//! ```

mod registration;
mod claims;

impl core_kernel::DomainPort for crate::ApiClient {}
