//! Field validation rules
//!
//! Each rule is a fixed pattern. The patterns are shared with the backend's own
//! validation, so they must not drift: a value one side accepts and the other
//! rejects surfaces as a confusing server rejection after submit.
//!
//! # Rule Evaluation
//!
//! 1. A required field that is empty or whitespace-only fails with
//!    [`REQUIRED_MESSAGE`].
//! 2. A non-empty value that does not satisfy its rule fails with the rule's
//!    own message. Whitespace counts as content for optional fields.
//! 3. Anything else passes, including an empty optional field.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Message for a missing required value
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message for a confirmation that differs from the password
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Symbols a password must draw at least one character from
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Minimum password length, in characters
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Named validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleName {
    WalletAddress,
    Password,
    Email,
    Phone,
    Name,
    Aadhaar,
    Pincode,
    LicenseNumber,
    Url,
}

impl RuleName {
    /// Every rule, in table order
    pub const ALL: [RuleName; 9] = [
        RuleName::WalletAddress,
        RuleName::Password,
        RuleName::Email,
        RuleName::Phone,
        RuleName::Name,
        RuleName::Aadhaar,
        RuleName::Pincode,
        RuleName::LicenseNumber,
        RuleName::Url,
    ];

    /// Name forms use to refer to the rule
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::WalletAddress => "walletAddress",
            RuleName::Password => "password",
            RuleName::Email => "email",
            RuleName::Phone => "phone",
            RuleName::Name => "name",
            RuleName::Aadhaar => "aadhaar",
            RuleName::Pincode => "pincode",
            RuleName::LicenseNumber => "licenseNumber",
            RuleName::Url => "url",
        }
    }

    /// Message shown when a non-empty value fails the rule
    pub fn message(&self) -> &'static str {
        match self {
            RuleName::WalletAddress => {
                "Please enter a valid wallet address (0x followed by 40 hex characters)"
            }
            RuleName::Password => {
                "Password must be at least 8 characters and include uppercase, lowercase, number and special character (@$!%*?&)"
            }
            RuleName::Email => "Please enter a valid email address",
            RuleName::Phone => "Please enter a valid phone number (10-15 digits)",
            RuleName::Name => "Name must be 2-50 letters",
            RuleName::Aadhaar => "Please enter a valid 12-digit Aadhaar number",
            RuleName::Pincode => "Please enter a valid 6-digit pincode",
            RuleName::LicenseNumber => "Please enter a valid license number",
            RuleName::Url => "Please enter a valid URL",
        }
    }

    /// Pattern a value must match in full
    ///
    /// `Password` has no single pattern: its acceptance needs four independent
    /// character-class checks plus a length bound, see [`is_strong_password`].
    pub fn pattern(&self) -> Option<&'static str> {
        match self {
            RuleName::WalletAddress => Some(r"^0x[a-fA-F0-9]{40}$"),
            RuleName::Password => None,
            RuleName::Email => Some(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
            RuleName::Phone => Some(r"^\+?[0-9]{10,15}$"),
            RuleName::Name => Some(r"^[a-zA-Z\s.'-]{2,50}$"),
            RuleName::Aadhaar => Some(r"^[2-9][0-9]{11}$"),
            RuleName::Pincode => Some(r"^[1-9][0-9]{5}$"),
            RuleName::LicenseNumber => Some(r"^[A-Za-z0-9/-]{5,20}$"),
            RuleName::Url => Some(r"^https?://[^\s]+$"),
        }
    }

    /// Returns true if `value` satisfies the rule
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            RuleName::Password => is_strong_password(value),
            rule => PATTERNS.get(rule).is_some_and(|regex| regex.is_match(value)),
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownRule(s.to_string()))
    }
}

static PATTERNS: Lazy<HashMap<RuleName, Regex>> = Lazy::new(|| {
    RuleName::ALL
        .into_iter()
        .filter_map(|rule| rule.pattern().map(|pattern| (rule, pattern)))
        .map(|(rule, pattern)| (rule, Regex::new(pattern).expect("Valid regex")))
        .collect()
});

struct PasswordClasses {
    lower: Regex,
    upper: Regex,
    digit: Regex,
    symbol: Regex,
}

static PASSWORD_CLASSES: Lazy<PasswordClasses> = Lazy::new(|| PasswordClasses {
    lower: Regex::new(r"[a-z]").expect("Valid regex"),
    upper: Regex::new(r"[A-Z]").expect("Valid regex"),
    digit: Regex::new(r"[0-9]").expect("Valid regex"),
    symbol: Regex::new(r"[@$!%*?&]").expect("Valid regex"),
});

/// Password strength check
///
/// At least [`PASSWORD_MIN_LENGTH`] characters with one lowercase letter, one
/// uppercase letter, one digit and one of [`PASSWORD_SYMBOLS`].
pub fn is_strong_password(value: &str) -> bool {
    let classes = &*PASSWORD_CLASSES;
    value.chars().count() >= PASSWORD_MIN_LENGTH
        && classes.lower.is_match(value)
        && classes.upper.is_match(value)
        && classes.digit.is_match(value)
        && classes.symbol.is_match(value)
}

/// Validates a single field value
///
/// # Arguments
///
/// * `value` - The raw field value
/// * `rule` - The rule the field is checked against
/// * `required` - Whether an empty value is an error
///
/// # Returns
///
/// `None` when the value is acceptable, otherwise the message to show
pub fn validate(value: &str, rule: RuleName, required: bool) -> Option<&'static str> {
    if required && value.trim().is_empty() {
        return Some(REQUIRED_MESSAGE);
    }

    if value.is_empty() {
        return None;
    }

    if !rule.accepts(value) {
        return Some(rule.message());
    }

    None
}

/// Checks a password confirmation field
///
/// Independent of the strength rule: a weak password confirmed correctly
/// passes here and fails in [`validate`].
pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.trim().is_empty() {
        return Some(REQUIRED_MESSAGE);
    }

    if password != confirm {
        return Some(PASSWORD_MISMATCH_MESSAGE);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        for rule in RuleName::ALL {
            if rule.pattern().is_some() {
                assert!(PATTERNS.contains_key(&rule), "missing pattern for {}", rule);
            }
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        assert_eq!(validate("   ", RuleName::Email, true), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_whitespace_only_optional_is_checked_against_rule() {
        assert_eq!(
            validate("   ", RuleName::Email, false),
            Some("Please enter a valid email address")
        );
        assert_eq!(validate(" ", RuleName::Pincode, false), Some(RuleName::Pincode.message()));
        assert_eq!(validate("", RuleName::Email, false), None);
    }

    #[test]
    fn test_rule_names_parse() {
        assert_eq!("walletAddress".parse::<RuleName>().unwrap(), RuleName::WalletAddress);
        assert_eq!("licenseNumber".parse::<RuleName>().unwrap(), RuleName::LicenseNumber);
        assert_eq!(
            "wallet_address".parse::<RuleName>(),
            Err(ValidationError::UnknownRule("wallet_address".to_string()))
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Seven characters, one of them multi-byte
        assert!(!is_strong_password("Aé1!abc"));
        assert!(is_strong_password("Aé1!abcd"));
    }
}
