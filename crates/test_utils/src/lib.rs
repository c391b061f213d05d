//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! MedVerify client test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixed, valid test data for forms, responses and records
//! - `builders`: Builder patterns with randomized valid defaults
//! - `stub_backend`: Local axum server standing in for the REST API
//! - `assertions`: Custom assertion helpers for request errors and bodies
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod stub_backend;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use stub_backend::*;
pub use assertions::*;
pub use generators::*;
