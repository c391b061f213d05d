//! Claims Domain
//!
//! Read-side of the platform: insurance claims and issued medical documents,
//! the ports that list them, and the fetchers that keep dashboard lists
//! loaded.
//!
//! # Fetch Lifecycle
//!
//! ```text
//! unmounted --mount(key)--> loading --response--> loaded | error
//!     ^                        |                      |
//!     +-------unmount()--------+------refresh()-------+
//! ```
//!
//! A response that arrives after an unmount, a re-mount or a newer refresh is
//! discarded.

pub mod claim;
pub mod document;
pub mod ports;
pub mod fetcher;
pub mod sources;
pub mod dashboard;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use document::IssuedDocument;
pub use ports::{ClaimsPort, IssuedDocumentsPort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockClaimsBackend;
pub use fetcher::{FetchOutcome, FetchState, ListFetcher, ListSource};
pub use sources::{InsuranceClaims, InsuranceClaimsQuery, PatientClaims, PatientIssuedDocuments};
pub use dashboard::{InsuranceDashboard, PatientDashboard};
pub use error::ClaimError;
