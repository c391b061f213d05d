//! Form-level validation
//!
//! Forms check every field at once before submitting, so the user sees all
//! problems together instead of one per round trip.

use std::collections::BTreeMap;

use crate::rules::{validate, validate_confirm_password, RuleName};

/// Result of validating a whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether every field passed
    pub is_valid: bool,
    /// First error per field, keyed by field name
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Adds an error for a field
    ///
    /// Only the first error for a field is kept, matching the single inline
    /// message a form shows under each input.
    pub fn add_error(&mut self, field: impl Into<String>, error: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| error.into());
        self.is_valid = false;
    }

    /// Error recorded for a field, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        for (field, error) in other.errors {
            self.add_error(field, error);
        }
    }

    /// Flattens the errors into `field: message` lines
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Collects field checks into a `ValidationResult`
///
/// # Examples
///
/// ```rust
/// use domain_validation::{FormValidator, RuleName};
///
/// let result = FormValidator::new()
///     .field("email", "not-an-email", RuleName::Email, true)
///     .optional("phone", None, RuleName::Phone)
///     .finish();
///
/// assert!(!result.is_valid);
/// assert!(result.error_for("email").is_some());
/// assert!(result.error_for("phone").is_none());
/// ```
#[derive(Debug, Default)]
pub struct FormValidator {
    result: ValidationResult,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a field against a rule
    pub fn field(mut self, name: &str, value: &str, rule: RuleName, required: bool) -> Self {
        if let Some(message) = validate(value, rule, required) {
            self.result.add_error(name, message);
        }
        self
    }

    /// Checks an optional field that may be absent altogether
    pub fn optional(self, name: &str, value: Option<&str>, rule: RuleName) -> Self {
        match value {
            Some(value) => self.field(name, value, rule, false),
            None => self,
        }
    }

    /// Checks that a free-text field is present
    pub fn required_text(mut self, name: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(name, crate::rules::REQUIRED_MESSAGE);
        }
        self
    }

    /// Checks a password confirmation field
    pub fn confirm_password(mut self, name: &str, password: &str, confirm: &str) -> Self {
        if let Some(message) = validate_confirm_password(password, confirm) {
            self.result.add_error(name, message);
        }
        self
    }

    /// Records a custom error
    pub fn error(mut self, name: &str, message: impl Into<String>) -> Self {
        self.result.add_error(name, message);
        self
    }

    pub fn finish(self) -> ValidationResult {
        self.result
    }
}

/// Implemented by every form payload that is validated before submit
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}
