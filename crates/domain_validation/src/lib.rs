//! Field Validation Domain
//!
//! Pure rules deciding whether a form field value is acceptable before it is
//! ever sent to the backend. The backend applies the same patterns, so the
//! rule table is part of the external contract.
//!
//! # Examples
//!
//! ```rust
//! use domain_validation::{validate, validate_confirm_password, RuleName, REQUIRED_MESSAGE};
//!
//! assert_eq!(validate("", RuleName::Email, true), Some(REQUIRED_MESSAGE));
//! assert_eq!(validate("", RuleName::Email, false), None);
//! assert!(validate("0x123", RuleName::WalletAddress, true).is_some());
//! assert_eq!(validate_confirm_password("Abc123!!", "Abc123!!"), None);
//! ```

pub mod rules;
pub mod form;
pub mod error;

pub use rules::{
    validate, validate_confirm_password, RuleName,
    REQUIRED_MESSAGE, PASSWORD_MISMATCH_MESSAGE,
};
pub use form::{FormValidator, Validate, ValidationResult};
pub use error::ValidationError;
