//! Core Kernel - Foundational types shared by every MedVerify client crate
//!
//! This crate provides the fundamental building blocks used across the workspace:
//! - Integer identifiers for backend entities
//! - Registration roles and the explicit session context
//! - File uploads destined for multipart requests
//! - The request error every port returns

pub mod identifiers;
pub mod role;
pub mod session;
pub mod upload;
pub mod timestamp;
pub mod ports;
pub mod error;

pub use identifiers::{
    UserId, PatientId, ValidatorId, IssuerId, InsuranceId, ClaimId, DocumentId,
};
pub use role::Role;
pub use session::Session;
pub use upload::FileUpload;
pub use ports::{DomainPort, RequestError};
pub use error::CoreError;
