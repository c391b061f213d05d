//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for the ports and adapters
//! split used across the workspace.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Application Layer                        │
//! │        (Registration orchestrator, dashboard fetchers)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │   (UserPort, PatientPort, ClaimsPort, etc.)                  │
//! │   Defined in each domain, depend only on core_kernel         │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │   HTTP Adapter    │     │   Mock Adapter   │
//!         │   (infra_http)    │     │    (tests)       │
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! Every port call is a single request against the backend: there are no
//! retries and no client-side timeouts, so `RequestError` only distinguishes
//! where a request went wrong, never whether it is worth repeating.

use thiserror::Error;

/// User-facing message for requests that never reached the server
pub const NETWORK_FAILURE_MESSAGE: &str = "Network error: unable to reach the server";

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// so forms and widgets can surface failures the same way whichever adapter
/// is behind the port.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be completed (connection refused, reset, DNS...)
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server answered with a non-success status
    #[error("Request rejected ({status}): {detail}")]
    Rejected {
        status: u16,
        detail: String,
    },

    /// A success response did not match the expected shape
    #[error("Decode error: {message}")]
    Decode {
        message: String,
    },

    /// The request body could not be built
    #[error("Encode error: {message}")]
    Encode {
        message: String,
    },
}

impl RequestError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        RequestError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Transport error keeping the underlying cause
    pub fn transport_from(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RequestError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a Rejected error from a status and server-provided detail
    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        RequestError::Rejected {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        RequestError::Decode {
            message: message.into(),
        }
    }

    /// Creates an Encode error
    pub fn encode(message: impl Into<String>) -> Self {
        RequestError::Encode {
            message: message.into(),
        }
    }

    /// HTTP status of a rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server rejected the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, RequestError::Rejected { .. })
    }

    /// Message to show the user
    ///
    /// Server rejections surface the server's detail verbatim; transport
    /// failures collapse to a generic network message.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Rejected { detail, .. } => detail.clone(),
            RequestError::Transport { .. } => NETWORK_FAILURE_MESSAGE.to_string(),
            RequestError::Decode { message } | RequestError::Encode { message } => message.clone(),
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they can be shared behind `Arc`
/// across async tasks.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_surfaces_detail() {
        let error = RequestError::rejected(400, "Wallet address already registered");
        assert!(error.is_rejection());
        assert_eq!(error.status(), Some(400));
        assert_eq!(error.user_message(), "Wallet address already registered");
        assert!(error.to_string().contains("400"));
    }

    #[test]
    fn test_transport_is_generic_for_users() {
        let error = RequestError::transport("connection refused");
        assert_eq!(error.status(), None);
        assert_eq!(error.user_message(), NETWORK_FAILURE_MESSAGE);
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_transport_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let error = RequestError::transport_from("send failed", io);
        assert!(std::error::Error::source(&error).is_some());
    }
}
