//! Infrastructure HTTP Layer
//!
//! This crate talks to the MedVerify REST backend using reqwest and
//! implements every domain port on top of it.
//!
//! # Request Handling
//!
//! - JSON bodies for structured data, multipart bodies for document uploads
//! - One attempt per call: no retries and no client-side timeout
//! - Non-success statuses become `RequestError::Rejected` carrying the
//!   server's `detail`, or the endpoint's fallback message when there is none
//! - Connection failures become `RequestError::Transport`
//! - Success bodies that do not decode become `RequestError::Decode`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_http::{ApiClient, HttpClientConfig};
//! use domain_claims::ClaimsPort;
//!
//! let client = ApiClient::new(&HttpClientConfig::new("http://localhost:8000"))?;
//! let claims = client.claims_by_patient(PatientId::new(42)).await?;
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod multipart;
pub mod adapters;

pub use client::{ApiClient, HttpClientConfig, DEFAULT_API_BASE_URL};
pub use multipart::{IntoMultipart, MultipartPayload, PartValue};
